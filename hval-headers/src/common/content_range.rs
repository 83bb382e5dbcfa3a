use http::HeaderValue;

use crate::Error;
use crate::util::{decode_single, encode_display};
use crate::value::ContentRange;

impl crate::TypedHeader for ContentRange {
    fn name() -> &'static ::http::header::HeaderName {
        &::http::header::CONTENT_RANGE
    }
}

impl crate::HeaderDecode for ContentRange {
    fn decode<'i, I>(values: &mut I) -> Result<Self, Error>
    where
        I: Iterator<Item = &'i HeaderValue>,
    {
        decode_single(values)
    }
}

impl crate::HeaderEncode for ContentRange {
    fn encode<E: Extend<HeaderValue>>(&self, values: &mut E) {
        values.extend(encode_display(self));
    }
}

#[cfg(test)]
mod tests {
    use super::super::{test_decode, test_encode};
    use super::*;

    #[test]
    fn test_content_range_header() {
        let value: ContentRange = test_decode(&["bytes 21010-47021/47022"]).unwrap();
        assert_eq!(value.bytes_range(), Some(21010..=47021));
        assert_eq!(value.complete_length(), Some(47022));

        let map = test_encode(ContentRange::unsatisfied_bytes(47022));
        assert_eq!(map["content-range"], "bytes */47022");

        assert_eq!(test_decode::<ContentRange>(&["bytes 0-47022/47022"]), None);
    }
}
