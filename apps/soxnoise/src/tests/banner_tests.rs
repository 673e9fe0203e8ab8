use super::*;

#[test]
fn notice_has_copyright_warranty_and_redistribution_lines() {
    let [copyright, warranty, redistribution] = lines();
    assert!(copyright.starts_with("soxnoise version "));
    assert!(copyright.contains(env!("CARGO_PKG_VERSION")));
    assert!(copyright.contains("Copyright (C)"));
    assert!(warranty.contains("ABSOLUTELY NO WARRANTY"));
    assert!(warranty.ends_with(LICENSE_URL));
    assert!(redistribution.starts_with("This is free software"));
}
