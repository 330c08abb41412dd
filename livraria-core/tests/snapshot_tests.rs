//! Snapshot tests for rendered cards using insta
//!
//! These capture the card mapping and card text so that changes in the
//! displayed fields show up in review.

use insta::{assert_json_snapshot, assert_snapshot};
use livraria_core::render::CatalogCard;
use livraria_core::{BookRecord, GridLayout};

#[test]
fn test_known_title_card_json() {
    let card = CatalogCard::from_record(&BookRecord::new(
        "6",
        "Harry Potter and the Half-Blood Prince",
    ));

    assert_json_snapshot!(card, @r###"
    {
      "key": "6",
      "title": "Harry Potter and the Half-Blood Prince",
      "image": "https://m.media-amazon.com/images/I/81SZC96OGOL._UF894,1000_QL80_.jpg",
      "price": "R$ 39,90",
      "category": "Fantasia",
      "rating": "4.7",
      "synopsis": "Harry aprende mais sobre os Horcruxes."
    }
    "###);
}

#[test]
fn test_known_title_card_text() {
    let card = CatalogCard::from_record(&BookRecord::new(
        "1",
        "Harry Potter and the Philosopher's Stone",
    ));
    let lines = GridLayout::new(240).card_lines(&card);

    assert_snapshot!(lines.join("\n"), @r###"
    Harry Potter and the Philosopher's Stone
    Capa: https://rocco.com.br/app/uploads/2024/04/9786555324013.jpg
    R$ 39,90
    Fantasia
    Avaliação: 4.8
    Harry descobre que é um bruxo e vai para Hogwarts.
    "###);
}

#[test]
fn test_unknown_title_card_text() {
    let card = CatalogCard::from_record(&BookRecord::new("2", "Unknown Title"));
    let lines = GridLayout::new(240).card_lines(&card);

    assert_snapshot!(lines.join("\n"), @r###"
    Unknown Title
    Capa: URL_PADRAO
    Preço não disponível
    Categoria não disponível
    Avaliação: Não avaliado
    Sinopse não disponível
    "###);
}
