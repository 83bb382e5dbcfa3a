derive_date_header! {
    #[header(name = DATE)]
    /// `Date` header, defined in [RFC9110](https://www.rfc-editor.org/rfc/rfc9110#section-6.6.1)
    ///
    /// The `Date` header field represents the date and time at which the
    /// message was originated.
    ///
    /// ## ABNF
    ///
    /// ```text
    /// Date = HTTP-date
    /// ```
    ///
    /// ## Example values
    ///
    /// * `Tue, 15 Nov 1994 08:12:31 GMT`
    ///
    /// # Example
    ///
    /// ```
    /// use hval_headers::Date;
    /// use std::time::SystemTime;
    ///
    /// let date = Date::try_from(SystemTime::now()).unwrap();
    /// ```
    pub struct Date(pub HttpDate);
}

impl Date {
    /// A `Date` header for the current time, if the clock is within range.
    #[must_use]
    pub fn now() -> Option<Self> {
        crate::value::HttpDate::now().map(Self)
    }
}
