use http::{HeaderMap, HeaderName, HeaderValue};

use crate::{Error, HeaderDecode, HeaderEncode};

/// Typed access to the field lines of an [`http::HeaderMap`].
pub trait HeaderMapExt: self::sealed::Sealed {
    /// Encodes `header` and stores its field lines under its name,
    /// dropping any lines previously stored there.
    ///
    /// A header that encodes to no lines leaves the map unchanged.
    fn typed_insert<H>(&mut self, header: H)
    where
        H: HeaderEncode;

    /// Like [`typed_try_get`](Self::typed_try_get), with decode failures
    /// reported as `None`.
    fn typed_get<H>(&self) -> Option<H>
    where
        H: HeaderDecode;

    /// Decodes every field line named `H::name()` into `H`.
    ///
    /// Returns `Ok(None)` when there are no such lines.
    fn typed_try_get<H>(&self) -> Result<Option<H>, Error>
    where
        H: HeaderDecode;
}

impl HeaderMapExt for HeaderMap {
    fn typed_insert<H>(&mut self, header: H)
    where
        H: HeaderEncode,
    {
        let mut lines = Vec::new();
        header.encode(&mut lines);
        replace_lines(self, H::name(), lines);
    }

    fn typed_get<H>(&self) -> Option<H>
    where
        H: HeaderDecode,
    {
        self.typed_try_get().ok().flatten()
    }

    fn typed_try_get<H>(&self) -> Result<Option<H>, Error>
    where
        H: HeaderDecode,
    {
        if !self.contains_key(H::name()) {
            return Ok(None);
        }
        H::decode(&mut self.get_all(H::name()).iter()).map(Some)
    }
}

/// Stores `lines` under `name` in order, replacing what was there.
fn replace_lines(map: &mut HeaderMap, name: &HeaderName, lines: Vec<HeaderValue>) {
    let mut lines = lines.into_iter();
    let Some(first) = lines.next() else {
        return;
    };
    map.insert(name, first);
    for line in lines {
        map.append(name, line);
    }
}

mod sealed {
    pub trait Sealed {}
    impl Sealed for ::http::HeaderMap {}
}
