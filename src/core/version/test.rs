use super::*;

#[test]
fn test_version_new_success() {
    let v = Version::new("1.2.3").unwrap();

    assert_eq!(v.as_str(), "1.2.3");
    assert_eq!(v.to_string(), "1.2.3");
}

#[test]
fn test_version_new_accepts_non_semver_token() {
    let v = Version::new("2020.01-rc1+build7").unwrap();

    assert_eq!(v.as_str(), "2020.01-rc1+build7");
}

#[test]
fn test_version_new_fails_with_empty() {
    assert!(Version::new("").is_err());
}

#[test]
fn test_version_from_str() {
    let v: Version = "0.9.0".parse().unwrap();

    assert_eq!(v, Version::new("0.9.0").unwrap());
}
