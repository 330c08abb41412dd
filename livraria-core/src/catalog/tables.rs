//! Compiled-in cover and detail data, keyed by the title the endpoint sends

use crate::types::BookDetail;

pub(super) const COVERS: &[(&str, &str)] = &[
    (
        "Harry Potter and the Philosopher's Stone",
        "https://rocco.com.br/app/uploads/2024/04/9786555324013.jpg",
    ),
    (
        "Harry Potter and the Chamber of Secrets",
        "https://rocco.com.br/app/uploads/2024/04/9786555324020.jpg",
    ),
    (
        "Harry Potter and the Prisoner of Azkaban",
        "https://rocco.com.br/app/uploads/2024/04/9786555324037.jpg",
    ),
    (
        "Harry Potter and the Goblet of Fire",
        "https://rocco.com.br/app/uploads/2024/04/9786555324044.jpg",
    ),
    (
        "Harry Potter and the Order of the Phoenix",
        "https://rocco.com.br/app/uploads/2024/04/9786555324051.jpg",
    ),
    (
        "Harry Potter and the Half-Blood Prince",
        "https://m.media-amazon.com/images/I/81SZC96OGOL._UF894,1000_QL80_.jpg",
    ),
    (
        "Harry Potter and the Deathly Hallows",
        "https://m.media-amazon.com/images/I/91hp-VvwgHL._AC_UF1000,1000_QL80_.jpg",
    ),
];

pub(super) const DETAILS: &[(&str, BookDetail)] = &[
    (
        "Harry Potter and the Philosopher's Stone",
        BookDetail::new(
            "R$ 39,90",
            "Fantasia",
            4.8,
            "Harry descobre que é um bruxo e vai para Hogwarts.",
        ),
    ),
    (
        "Harry Potter and the Chamber of Secrets",
        BookDetail::new(
            "R$ 39,90",
            "Fantasia",
            4.7,
            "Harry enfrenta novos perigos em sua segunda ano.",
        ),
    ),
    (
        "Harry Potter and the Prisoner of Azkaban",
        BookDetail::new(
            "R$ 39,90",
            "Fantasia",
            4.6,
            "Harry descobre mais sobre seu passado.",
        ),
    ),
    (
        "Harry Potter and the Goblet of Fire",
        BookDetail::new(
            "R$ 39,90",
            "Fantasia",
            4.8,
            "Harry participa do Torneio Tribruxo.",
        ),
    ),
    (
        "Harry Potter and the Order of the Phoenix",
        BookDetail::new(
            "R$ 39,90",
            "Fantasia",
            4.5,
            "Harry enfrenta a volta de Voldemort.",
        ),
    ),
    (
        "Harry Potter and the Half-Blood Prince",
        BookDetail::new(
            "R$ 39,90",
            "Fantasia",
            4.7,
            "Harry aprende mais sobre os Horcruxes.",
        ),
    ),
    (
        "Harry Potter and the Deathly Hallows",
        BookDetail::new(
            "R$ 39,90",
            "Fantasia",
            4.9,
            "A batalha final entre Harry e Voldemort.",
        ),
    ),
];
