use hval_parse::{Cursor, Parser, ParserExt, Sequence, first_available, literal_char, rws, token};
use hval_utils::collections::NonEmptyVec;
use hval_utils::macros::error::static_str_error;
use smol_str::SmolStr;
use std::fmt;

use super::Comment;
use crate::Grammar;
use crate::util::is_token;

static_str_error! {
    /// The product name or version is not a token.
    pub struct InvalidProduct = "invalid product";
}

/// A product identifier, as found in `User-Agent` and `Server`.
///
/// ```text
/// product         = token [ "/" product-version ]
/// product-version = token
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Product {
    name: SmolStr,
    version: Option<SmolStr>,
}

impl Product {
    /// Create a product without a version.
    pub fn new(name: &str) -> Result<Self, InvalidProduct> {
        if !is_token(name) {
            return Err(InvalidProduct);
        }
        Ok(Self {
            name: SmolStr::new(name),
            version: None,
        })
    }

    /// Set the version of this product.
    pub fn with_version(mut self, version: &str) -> Result<Self, InvalidProduct> {
        if !is_token(version) {
            return Err(InvalidProduct);
        }
        self.version = Some(SmolStr::new(version));
        Ok(self)
    }

    /// The product name, as written.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The product version, if any.
    #[must_use]
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }
}

impl Grammar for Product {
    fn parse_from(cursor: &mut Cursor<'_>) -> Option<Self> {
        let mut seq = Sequence::new(cursor);
        let name = seq.read(token)?;
        let version = seq.read_optional((literal_char('/'), token).map(|(_, version)| version));
        seq.finish();
        Some(Self {
            name: SmolStr::new(name),
            version: version.map(SmolStr::new),
        })
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        if let Some(version) = &self.version {
            write!(f, "/{version}")?;
        }
        Ok(())
    }
}

impl_str_codec!(Product);

/// An element of a [`ProductList`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ProductOrComment {
    /// `product`
    Product(Product),
    /// `comment`
    Comment(Comment),
}

impl ProductOrComment {
    /// The product, if this is one.
    #[must_use]
    pub fn as_product(&self) -> Option<&Product> {
        match self {
            Self::Product(product) => Some(product),
            Self::Comment(_) => None,
        }
    }

    /// The comment, if this is one.
    #[must_use]
    pub fn as_comment(&self) -> Option<&Comment> {
        match self {
            Self::Product(_) => None,
            Self::Comment(comment) => Some(comment),
        }
    }
}

impl Grammar for ProductOrComment {
    fn parse_from(cursor: &mut Cursor<'_>) -> Option<Self> {
        first_available((
            Product::parse_from.map(Self::Product),
            Comment::parse_from.map(Self::Comment),
        ))
        .parse(cursor)
    }
}

impl fmt::Display for ProductOrComment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Product(product) => fmt::Display::fmt(product, f),
            Self::Comment(comment) => fmt::Display::fmt(comment, f),
        }
    }
}

impl From<Product> for ProductOrComment {
    fn from(product: Product) -> Self {
        Self::Product(product)
    }
}

impl From<Comment> for ProductOrComment {
    fn from(comment: Comment) -> Self {
        Self::Comment(comment)
    }
}

/// The value of a `User-Agent` or `Server` header.
///
/// ```text
/// User-Agent = product *( RWS ( product / comment ) )
/// ```
///
/// ```
/// use hval_headers::value::ProductList;
///
/// let ua: ProductList = "curl/8.5.0 (x86_64-pc-linux-gnu) libcurl/8.5.0".parse().unwrap();
/// assert_eq!(ua.product().name(), "curl");
/// assert_eq!(ua.products().count(), 2);
/// assert_eq!(ua.comments().next().map(|c| c.text()), Some("x86_64-pc-linux-gnu"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProductList {
    product: Product,
    rest: Vec<ProductOrComment>,
}

impl ProductList {
    /// Create a list starting with the given product.
    #[must_use]
    pub fn new(product: Product) -> Self {
        Self {
            product,
            rest: Vec::new(),
        }
    }

    /// Append a product or comment.
    #[must_use]
    pub fn with(mut self, element: impl Into<ProductOrComment>) -> Self {
        self.rest.push(element.into());
        self
    }

    /// The leading product.
    #[must_use]
    pub fn product(&self) -> &Product {
        &self.product
    }

    /// All elements, in order, starting with the leading product.
    pub fn iter(&self) -> impl Iterator<Item = ProductOrCommentRef<'_>> {
        std::iter::once(ProductOrCommentRef::Product(&self.product)).chain(self.rest.iter().map(
            |element| match element {
                ProductOrComment::Product(product) => ProductOrCommentRef::Product(product),
                ProductOrComment::Comment(comment) => ProductOrCommentRef::Comment(comment),
            },
        ))
    }

    /// All products, in order.
    pub fn products(&self) -> impl Iterator<Item = &Product> {
        std::iter::once(&self.product)
            .chain(self.rest.iter().filter_map(ProductOrComment::as_product))
    }

    /// All comments, in order.
    pub fn comments(&self) -> impl Iterator<Item = &Comment> {
        self.rest.iter().filter_map(ProductOrComment::as_comment)
    }

    /// All elements as a [`NonEmptyVec`], in order.
    #[must_use]
    pub fn into_elements(self) -> NonEmptyVec<ProductOrComment> {
        NonEmptyVec {
            head: ProductOrComment::Product(self.product),
            tail: self.rest,
        }
    }
}

/// A borrowed element of a [`ProductList`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductOrCommentRef<'a> {
    /// `product`
    Product(&'a Product),
    /// `comment`
    Comment(&'a Comment),
}

impl Grammar for ProductList {
    fn parse_from(cursor: &mut Cursor<'_>) -> Option<Self> {
        let mut seq = Sequence::new(cursor);
        let product = seq.read(Product::parse_from)?;
        let rest = seq.read_while_available(rws, ProductOrComment::parse_from);
        seq.finish();
        Some(Self { product, rest })
    }
}

impl fmt::Display for ProductList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.product, f)?;
        for element in &self.rest {
            write!(f, " {element}")?;
        }
        Ok(())
    }
}

impl_str_codec!(ProductList);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_product() {
        let product: Product = "Mozilla/5.0".parse().unwrap();
        assert_eq!(product.name(), "Mozilla");
        assert_eq!(product.version(), Some("5.0"));

        let product: Product = "Apache".parse().unwrap();
        assert_eq!(product.version(), None);

        assert!("Mozilla/".parse::<Product>().is_err());
        assert!("/5.0".parse::<Product>().is_err());
    }

    #[test]
    fn test_parse_product_list() {
        let input = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Safari/537.36";
        let list: ProductList = input.parse().unwrap();
        assert_eq!(
            list.products().map(ToString::to_string).collect::<Vec<_>>(),
            ["Mozilla/5.0", "AppleWebKit/537.36", "Safari/537.36"]
        );
        assert_eq!(
            list.comments().map(Comment::text).collect::<Vec<_>>(),
            ["Macintosh; Intel Mac OS X 10_15_7", "KHTML, like Gecko"]
        );
        assert_eq!(list.iter().count(), 5);
        assert_eq!(list.to_string(), input);
        assert_eq!(list.into_elements().len(), 5);
    }

    #[test]
    fn test_product_list_normalizes_whitespace() {
        let list: ProductList = "nginx/1.25  (Ubuntu)".parse().unwrap();
        assert_eq!(list.to_string(), "nginx/1.25 (Ubuntu)");
    }

    #[test]
    fn test_invalid_product_list() {
        for invalid in ["", "(comment first)", "curl/8 ", "curl/8 (unclosed", " curl"] {
            assert!(invalid.parse::<ProductList>().is_err(), "input: {invalid:?}");
        }
    }

    #[test]
    fn test_build_product_list() {
        let list = ProductList::new(Product::new("hval").unwrap().with_version("0.1").unwrap())
            .with(Comment::new("test").unwrap())
            .with(Product::new("tokio").unwrap());
        assert_eq!(list.to_string(), "hval/0.1 (test) tokio");
        assert_eq!(Product::new("a b"), Err(InvalidProduct));
    }
}
