derive_date_header! {
    #[header(name = EXPIRES)]
    /// `Expires` header, defined in [RFC9111](https://www.rfc-editor.org/rfc/rfc9111#section-5.3)
    ///
    /// The `Expires` header field gives the date/time after which the
    /// response is considered stale.
    ///
    /// The presence of an Expires field does not imply that the original
    /// resource will change or cease to exist at, before, or after that
    /// time.
    ///
    /// # ABNF
    ///
    /// ```text
    /// Expires = HTTP-date
    /// ```
    ///
    /// # Example values
    /// * `Thu, 01 Dec 1994 16:00:00 GMT`
    pub struct Expires(pub HttpDate);
}

#[cfg(test)]
mod tests {
    use super::super::{test_decode, test_encode};
    use super::*;
    use std::time::{Duration, SystemTime, UNIX_EPOCH};

    #[test]
    fn test_expires() {
        let expires = Expires::try_from(UNIX_EPOCH + Duration::from_millis(786_297_600_500)).unwrap();
        assert_eq!(test_encode(expires)["expires"], "Thu, 01 Dec 1994 16:00:00 GMT");
        assert_eq!(
            test_decode::<Expires>(&["Thu, 01 Dec 1994 16:00:00 GMT"]),
            Some(expires)
        );
    }

    #[test]
    fn test_expires_invalid() {
        // an invalid date means "already expired" to caches,
        // to the typed header it is simply not an `Expires` value
        assert_eq!(test_decode::<Expires>(&["0"]), None);
        assert!(Expires::try_from(UNIX_EPOCH - Duration::from_secs(1)).is_err());
        assert!(SystemTime::from(Expires::try_from(UNIX_EPOCH).unwrap()) == UNIX_EPOCH);
    }
}
