//! Ordered collections of model values.
//!
//! JSON arrays of any [`JsonCodec`] type are handled by the free functions in
//! this module. [`List`] is the typed collection attribute used by resources
//! that embed other resources; on the wire it is an object carrying `kind`,
//! `href` and `items`.

use std::io::{Read, Write};

use ocm_buffers::{Reader, Source, StreamingReader};

use crate::{
    Attribute, Builder, Error, JsonCodec, JsonIterator, JsonStream, ReaderOptions, Resource,
    WriterOptions,
};

/// Writes `items` as a JSON array into an existing stream.
pub fn write<T: JsonCodec, W: Write>(items: &[T], stream: &mut JsonStream<W>) -> Result<(), Error> {
    stream.begin_array()?;
    for item in items {
        item.write_json(stream)?;
    }
    stream.end_array()
}

pub fn to_writer<T: JsonCodec, W: Write>(items: &[T], writer: W) -> Result<(), Error> {
    to_writer_with(items, writer, &WriterOptions::default())
}

pub fn to_writer_with<T: JsonCodec, W: Write>(
    items: &[T],
    writer: W,
    options: &WriterOptions,
) -> Result<(), Error> {
    let mut stream = JsonStream::with_options(writer, options);
    write(items, &mut stream)?;
    stream.flush()
}

pub fn to_vec<T: JsonCodec>(items: &[T]) -> Result<Vec<u8>, Error> {
    let mut out = Vec::new();
    to_writer(items, &mut out)?;
    Ok(out)
}

/// Reads a JSON array from an existing iterator.
///
/// `null` elements are rejected, since an element cannot be absent.
pub fn read<T: JsonCodec, S: Source>(iter: &mut JsonIterator<S>) -> Result<Vec<T>, Error> {
    let mut items = Vec::new();
    iter.begin_array()?;
    while iter.next_element()? {
        items.push(T::read_json(iter)?);
    }
    Ok(items)
}

pub fn from_slice<T: JsonCodec>(bytes: &[u8]) -> Result<Vec<T>, Error> {
    from_slice_with(bytes, &ReaderOptions::default())
}

pub fn from_slice_with<T: JsonCodec>(
    bytes: &[u8],
    options: &ReaderOptions,
) -> Result<Vec<T>, Error> {
    let mut iter = JsonIterator::with_options(Reader::new(bytes), options);
    crate::codec::read_document(&mut iter)
}

pub fn from_str<T: JsonCodec>(text: &str) -> Result<Vec<T>, Error> {
    from_slice(text.as_bytes())
}

pub fn from_reader<T: JsonCodec, R: Read>(reader: R) -> Result<Vec<T>, Error> {
    from_reader_with(reader, &ReaderOptions::default())
}

pub fn from_reader_with<T: JsonCodec, R: Read>(
    reader: R,
    options: &ReaderOptions,
) -> Result<Vec<T>, Error> {
    let source = StreamingReader::with_alloc_size(reader, options.chunk_size);
    let mut iter = JsonIterator::with_options(source, options);
    crate::codec::read_document(&mut iter)
}

/// An immutable list of model values, possibly only a link to the list.
#[derive(Debug, Clone, PartialEq)]
pub struct List<T> {
    link: bool,
    href: String,
    items: Vec<T>,
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self {
            link: false,
            href: String::new(),
            items: Vec::new(),
        }
    }
}

impl<T> List<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items,
            ..Self::default()
        }
    }

    /// Returns `true` if this is a link to the list rather than its content.
    pub fn is_link(&self) -> bool {
        self.link
    }

    pub fn href(&self) -> &str {
        &self.href
    }

    pub fn get_href(&self) -> Option<&str> {
        (!self.href.is_empty()).then_some(self.href.as_str())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Returns the first item for which `predicate` holds.
    pub fn find(&self, mut predicate: impl FnMut(&T) -> bool) -> Option<&T> {
        self.items.iter().find(|item| predicate(item))
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.items.clone()
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}

impl<T: Attribute> List<T> {
    pub fn builder() -> ListBuilder<T> {
        ListBuilder::default()
    }
}

impl<T: Resource> List<T> {
    pub fn kind(&self) -> &'static str {
        if self.link {
            T::LIST_LINK_KIND
        } else {
            T::LIST_KIND
        }
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

/// Stages the content of a [`List`].
#[derive(Debug, Clone, Default)]
pub struct ListBuilder<T: Attribute> {
    link: bool,
    href: String,
    items: Vec<T::Staged>,
}

impl<T: Attribute> ListBuilder<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the flag that indicates if this is a link.
    pub fn link(&mut self, value: bool) -> &mut Self {
        self.link = value;
        self
    }

    pub fn href(&mut self, value: impl Into<String>) -> &mut Self {
        self.href = value.into();
        self
    }

    /// Replaces the staged items.
    pub fn items<I, V>(&mut self, values: I) -> &mut Self
    where
        I: IntoIterator<Item = V>,
        V: Into<T::Staged>,
    {
        self.items = values.into_iter().map(Into::into).collect();
        self
    }

    pub fn push(&mut self, value: impl Into<T::Staged>) -> &mut Self {
        self.items.push(value.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty() && self.href.is_empty() && !self.link
    }

    pub fn copy(&mut self, list: &List<T>) -> &mut Self {
        self.link = list.link;
        self.href = list.href.clone();
        self.items = list.items.iter().map(T::stage).collect();
        self
    }

    pub fn build(&self) -> Result<List<T>, Error> {
        Ok(List {
            link: self.link,
            href: self.href.clone(),
            items: self
                .items
                .iter()
                .map(T::finish)
                .collect::<Result<_, _>>()?,
        })
    }
}

impl<T: Attribute> Builder for ListBuilder<T> {
    type Object = List<T>;

    fn build(&self) -> Result<List<T>, Error> {
        ListBuilder::build(self)
    }

    fn copy(&mut self, list: &List<T>) -> &mut Self {
        ListBuilder::copy(self, list)
    }

    fn is_empty(&self) -> bool {
        ListBuilder::is_empty(self)
    }
}

impl<T: Attribute> From<&ListBuilder<T>> for ListBuilder<T> {
    fn from(builder: &ListBuilder<T>) -> Self {
        builder.clone()
    }
}

impl<T: Attribute> From<&mut ListBuilder<T>> for ListBuilder<T> {
    fn from(builder: &mut ListBuilder<T>) -> Self {
        builder.clone()
    }
}

impl<T: Attribute> From<&List<T>> for ListBuilder<T> {
    fn from(list: &List<T>) -> Self {
        let mut builder = Self::new();
        builder.copy(list);
        builder
    }
}

impl<T: Resource> JsonCodec for List<T> {
    fn write_json<W: Write>(&self, stream: &mut JsonStream<W>) -> Result<(), Error> {
        stream.begin_object()?;
        stream.field("kind")?;
        stream.write_str(self.kind())?;
        if !self.href.is_empty() {
            stream.field("href")?;
            stream.write_str(&self.href)?;
        }
        stream.field("items")?;
        write(&self.items, stream)?;
        stream.end_object()
    }

    fn read_json<S: Source>(iter: &mut JsonIterator<S>) -> Result<Self, Error> {
        let mut list = List::default();
        iter.begin_object()?;
        while let Some(key) = iter.next_field()? {
            if iter.read_null()? {
                continue;
            }
            match key.as_str() {
                "kind" => list.link = iter.read_string()? == T::LIST_LINK_KIND,
                "href" => list.href = iter.read_string()?,
                "items" => list.items = read(iter)?,
                _ => iter.skip_unknown(&key)?,
            }
        }
        Ok(list)
    }
}

impl<T: Resource> Attribute for List<T> {
    type Staged = ListBuilder<T>;
    type Ref<'a>
        = &'a List<T>
    where
        Self: 'a;

    fn borrow_attr(&self) -> &List<T> {
        self
    }

    fn stage(&self) -> ListBuilder<T> {
        ListBuilder::from(self)
    }

    fn finish(staged: &ListBuilder<T>) -> Result<List<T>, Error> {
        staged.build()
    }
}
