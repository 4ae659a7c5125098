use url::Url;

use crate::curl::CurlRequest;

/// Builds a request description for `url` with every other field defaulted.
#[allow(unused)]
pub fn request(url: &str) -> CurlRequest {
    CurlRequest::new(Url::parse(url).unwrap())
}

#[allow(unused)]
pub fn generic_parse<F, I, T>(parser: F, input: I, expect: T)
where
    F: Fn(I) -> T,
    T: PartialEq + std::fmt::Debug,
    I: std::fmt::Debug,
{
    let result = parser(input);
    assert_eq!(
        expect, result,
        "The expect:\r\n({:?}) should be same with the result:\r\n({:?})",
        expect, result
    );
}
