use super::*;

#[test]
fn rating_label_formats_one_decimal() {
    assert_eq!(rating_label(Some(8.3)), "★ 8.3");
    assert_eq!(rating_label(Some(7.0)), "★ 7.0");
    assert_eq!(rating_label(None), "Not rated");
}

#[test]
fn genre_label_joins_with_separator() {
    let genres = vec!["Crime".to_owned(), "Drama".to_owned()];
    assert_eq!(genre_label(&genres), "Crime · Drama");
    assert_eq!(genre_label(&[]), "");
}

#[test]
fn release_year_reads_iso_prefix() {
    assert_eq!(release_year(Some("1995-12-15")), Some("1995"));
    assert_eq!(release_year(Some("n/a")), None);
    assert_eq!(release_year(Some("")), None);
    assert_eq!(release_year(None), None);
}

#[test]
fn catalog_starts_loading() {
    assert_eq!(CatalogState::default(), CatalogState::Loading);
}
