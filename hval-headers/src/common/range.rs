use http::HeaderValue;

use crate::Error;
use crate::util::{decode_single, encode_display};
use crate::value::Range;

impl crate::TypedHeader for Range {
    fn name() -> &'static ::http::header::HeaderName {
        &::http::header::RANGE
    }
}

impl crate::HeaderDecode for Range {
    fn decode<'i, I>(values: &mut I) -> Result<Self, Error>
    where
        I: Iterator<Item = &'i HeaderValue>,
    {
        decode_single(values)
    }
}

impl crate::HeaderEncode for Range {
    fn encode<E: Extend<HeaderValue>>(&self, values: &mut E) {
        values.extend(encode_display(self));
    }
}

#[cfg(test)]
mod tests {
    use super::super::{test_decode, test_encode};
    use super::*;
    use crate::value::ByteRangeSpec;

    #[test]
    fn test_range_header() {
        let range: Range = test_decode(&["bytes=0-99, -10"]).unwrap();
        assert_eq!(
            range.satisfiable_ranges(50).collect::<Vec<_>>(),
            [0..=49, 40..=49]
        );

        let range = Range::new(ByteRangeSpec::From(1024));
        assert_eq!(test_encode(range)["range"], "bytes=1024-");
    }

    #[test]
    fn test_range_header_invalid() {
        assert_eq!(test_decode::<Range>(&["bytes=1-0"]), None);
        assert_eq!(test_decode::<Range>(&["bytes=0-1", "bytes=2-3"]), None);
    }
}
