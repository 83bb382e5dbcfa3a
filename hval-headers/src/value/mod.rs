//! Header value grammars.
//!
//! Every type here parses with [`Grammar`](crate::Grammar), so it can be
//! used from `FromStr` as well as from within a larger grammar, and
//! writes its canonical wire format with `Display`.

#[macro_use]
mod token_value;

pub(crate) mod parameters;
#[doc(inline)]
pub use parameters::{InvalidParameter, Parameters, parameter};

mod media_range;
#[doc(inline)]
pub use media_range::{InvalidMediaRange, MediaRange};

mod language;
#[doc(inline)]
pub use language::{InvalidLanguage, Language};

mod charset;
#[doc(inline)]
pub use charset::{Charset, InvalidCharset};

mod content_coding;
#[doc(inline)]
pub use content_coding::{ContentCoding, InvalidContentCoding};

mod transfer_coding;
#[doc(inline)]
pub use transfer_coding::TransferCoding;

mod cache_directive;
#[doc(inline)]
pub use cache_directive::CacheDirective;

mod challenge;
#[doc(inline)]
pub use challenge::{ChallengeContent, ChallengeMessage, InvalidChallenge};

mod entity_tag;
#[doc(inline)]
pub use entity_tag::{EntityTag, EntityTagMatch, InvalidEntityTag};

mod http_date;
#[doc(inline)]
pub use http_date::{HttpDate, InvalidHttpDate};

mod comment;
#[doc(inline)]
pub use comment::{Comment, InvalidComment, MAX_COMMENT_DEPTH};

mod via;
#[doc(inline)]
pub use via::ViaElement;

mod warning;
#[doc(inline)]
pub use warning::{InvalidWarning, WarningValue};

mod range;
#[doc(inline)]
pub use range::{ByteRangeSpec, ContentRange, InvalidByteRange, Range};

mod product;
#[doc(inline)]
pub use product::{InvalidProduct, Product, ProductList, ProductOrComment, ProductOrCommentRef};

mod header_name;
#[doc(inline)]
pub use header_name::{HeaderName, InvalidHeaderName};
