//! One page of a collection listing.

use std::io::Write;

use ocm_buffers::Source;

use crate::{Attribute, Builder, Error, FieldSet, JsonCodec, JsonIterator, JsonStream};

const KIND: usize = 0;
const PAGE: usize = 1;
const SIZE: usize = 2;
const TOTAL: usize = 3;
const ITEMS: usize = 4;

/// A page of items as returned by collection endpoints:
/// `{"kind": ..., "page": 1, "size": 2, "total": 10, "items": [...]}`.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    fields: FieldSet,
    kind: String,
    page: i64,
    size: i64,
    total: i64,
    items: Vec<T>,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            fields: FieldSet::new(),
            kind: String::new(),
            page: 0,
            size: 0,
            total: 0,
            items: Vec::new(),
        }
    }
}

impl<T> Page<T> {
    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn get_kind(&self) -> Option<&str> {
        self.fields.is_set(KIND).then_some(self.kind.as_str())
    }

    /// Page number, starting at 1.
    pub fn page(&self) -> i64 {
        self.page
    }

    pub fn get_page(&self) -> Option<i64> {
        self.fields.is_set(PAGE).then_some(self.page)
    }

    /// Number of items in this page.
    pub fn size(&self) -> i64 {
        self.size
    }

    pub fn get_size(&self) -> Option<i64> {
        self.fields.is_set(SIZE).then_some(self.size)
    }

    /// Number of items in the whole collection.
    pub fn total(&self) -> i64 {
        self.total
    }

    pub fn get_total(&self) -> Option<i64> {
        self.fields.is_set(TOTAL).then_some(self.total)
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn get_items(&self) -> Option<&[T]> {
        self.fields.is_set(ITEMS).then_some(self.items.as_slice())
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}

impl<T: Attribute> Page<T> {
    pub fn builder() -> PageBuilder<T> {
        PageBuilder::default()
    }
}

#[derive(Debug, Clone, Default)]
pub struct PageBuilder<T: Attribute> {
    fields: FieldSet,
    kind: String,
    page: i64,
    size: i64,
    total: i64,
    items: Vec<T::Staged>,
}

impl<T: Attribute> PageBuilder<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn kind(&mut self, value: impl Into<String>) -> &mut Self {
        self.kind = value.into();
        self.fields.set(KIND);
        self
    }

    pub fn page(&mut self, value: i64) -> &mut Self {
        self.page = value;
        self.fields.set(PAGE);
        self
    }

    pub fn size(&mut self, value: i64) -> &mut Self {
        self.size = value;
        self.fields.set(SIZE);
        self
    }

    pub fn total(&mut self, value: i64) -> &mut Self {
        self.total = value;
        self.fields.set(TOTAL);
        self
    }

    pub fn items<I, V>(&mut self, values: I) -> &mut Self
    where
        I: IntoIterator<Item = V>,
        V: Into<T::Staged>,
    {
        self.items = values.into_iter().map(Into::into).collect();
        self.fields.set(ITEMS);
        self
    }

    pub fn push(&mut self, value: impl Into<T::Staged>) -> &mut Self {
        self.items.push(value.into());
        self.fields.set(ITEMS);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn copy(&mut self, page: &Page<T>) -> &mut Self {
        self.fields = page.fields;
        self.kind = page.kind.clone();
        self.page = page.page;
        self.size = page.size;
        self.total = page.total;
        self.items = page.items.iter().map(T::stage).collect();
        self
    }

    pub fn build(&self) -> Result<Page<T>, Error> {
        Ok(Page {
            fields: self.fields,
            kind: self.kind.clone(),
            page: self.page,
            size: self.size,
            total: self.total,
            items: self
                .items
                .iter()
                .map(T::finish)
                .collect::<Result<_, _>>()?,
        })
    }
}

impl<T: Attribute> Builder for PageBuilder<T> {
    type Object = Page<T>;

    fn build(&self) -> Result<Page<T>, Error> {
        PageBuilder::build(self)
    }

    fn copy(&mut self, page: &Page<T>) -> &mut Self {
        PageBuilder::copy(self, page)
    }

    fn is_empty(&self) -> bool {
        PageBuilder::is_empty(self)
    }
}

impl<T: JsonCodec> JsonCodec for Page<T> {
    fn write_json<W: Write>(&self, stream: &mut JsonStream<W>) -> Result<(), Error> {
        stream.begin_object()?;
        if self.fields.is_set(KIND) {
            stream.field("kind")?;
            stream.write_str(&self.kind)?;
        }
        for (slot, name, value) in [
            (PAGE, "page", self.page),
            (SIZE, "size", self.size),
            (TOTAL, "total", self.total),
        ] {
            if self.fields.is_set(slot) {
                stream.field(name)?;
                stream.write_i64(value)?;
            }
        }
        if self.fields.is_set(ITEMS) {
            stream.field("items")?;
            crate::list::write(&self.items, stream)?;
        }
        stream.end_object()
    }

    fn read_json<S: Source>(iter: &mut JsonIterator<S>) -> Result<Self, Error> {
        let mut page = Page::default();
        iter.begin_object()?;
        while let Some(key) = iter.next_field()? {
            if iter.read_null()? {
                continue;
            }
            match key.as_str() {
                "kind" => {
                    page.kind = iter.read_string()?;
                    page.fields.set(KIND);
                }
                "page" => {
                    page.page = iter.read_i64()?;
                    page.fields.set(PAGE);
                }
                "size" => {
                    page.size = iter.read_i64()?;
                    page.fields.set(SIZE);
                }
                "total" => {
                    page.total = iter.read_i64()?;
                    page.fields.set(TOTAL);
                }
                "items" => {
                    page.items = crate::list::read(iter)?;
                    page.fields.set(ITEMS);
                }
                _ => iter.skip_unknown(&key)?,
            }
        }
        Ok(page)
    }
}
