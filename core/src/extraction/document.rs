use crate::error::{FeretError, Result};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::path::Path;

/// Element node of a parsed ground-truth document
///
/// Names are stored without namespace prefixes, so `<fr:Pose>` and `<Pose>`
/// are both reachable as `Pose`. Text content is not retained; the
/// ground-truth files carry everything of interest in attributes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct XmlElement {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<XmlElement>,
}

impl XmlElement {
    /// Local name of the element
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Value of an attribute on this element
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Direct child elements in document order
    pub fn children(&self) -> impl Iterator<Item = &XmlElement> {
        self.children.iter()
    }

    /// First direct child with the given name
    pub fn child(&self, name: &str) -> Option<&XmlElement> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Resolves a slash-separated element path relative to this element
    ///
    /// Every segment is matched against direct children only. An empty path
    /// resolves to `self`.
    pub fn find(&self, path: &str) -> Option<&XmlElement> {
        path.split('/')
            .filter(|segment| !segment.is_empty())
            .try_fold(self, |element, segment| element.child(segment))
    }

    /// First element with the given name below this one (depth-first, pre-order)
    ///
    /// Only used to locate the top-level container of a document; leaf
    /// lookups go through [`XmlElement::find`] so they stay scoped.
    pub fn descendant(&self, name: &str) -> Option<&XmlElement> {
        for child in &self.children {
            if child.name == name {
                return Some(child);
            }
            if let Some(found) = child.descendant(name) {
                return Some(found);
            }
        }
        None
    }

    /// Resolves an attribute path such as `@id` or `Gender/@value`
    ///
    /// Returns `None` when the path has no `@` component or when any element
    /// along the way is absent.
    pub fn attribute_at(&self, path: &str) -> Option<&str> {
        let (element_path, attr_name) = path.rsplit_once('@')?;
        self.find(element_path)?.attr(attr_name)
    }
}

/// Parsed XML document, tagged with its source for error messages
#[derive(Debug, Clone)]
pub struct XmlDocument {
    source: String,
    root: XmlElement,
}

impl XmlDocument {
    /// Reads and parses a document from disk
    ///
    /// The file is read and closed before parsing starts.
    pub fn open(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                FeretError::MissingFile(path.to_path_buf())
            } else {
                FeretError::file(path, e)
            }
        })?;
        Self::parse(&path.display().to_string(), &text)
    }

    /// Parses a document from a string
    ///
    /// `source` names the document in error messages (usually its path).
    pub fn parse(source: &str, xml: &str) -> Result<Self> {
        let mut reader = Reader::from_str(xml);
        reader.trim_text(true);

        let mut stack: Vec<XmlElement> = Vec::new();
        let mut root: Option<XmlElement> = None;

        loop {
            match reader.read_event() {
                Ok(Event::Start(ref e)) => {
                    stack.push(element_from_start(&reader, e, source)?);
                }
                Ok(Event::Empty(ref e)) => {
                    let element = element_from_start(&reader, e, source)?;
                    attach(&mut stack, &mut root, element, source)?;
                }
                Ok(Event::End(_)) => {
                    let element = stack
                        .pop()
                        .ok_or_else(|| FeretError::xml(source, "unexpected closing tag"))?;
                    attach(&mut stack, &mut root, element, source)?;
                }
                Ok(Event::Eof) => break,
                Ok(_) => {}
                Err(e) => {
                    return Err(FeretError::xml(
                        source,
                        format!("at byte {}: {}", reader.buffer_position(), e),
                    ))
                }
            }
        }

        if let Some(open) = stack.last() {
            return Err(FeretError::xml(
                source,
                format!("unclosed <{}> element", open.name),
            ));
        }

        let root = root.ok_or_else(|| FeretError::xml(source, "document has no root element"))?;

        Ok(Self {
            source: source.to_string(),
            root,
        })
    }

    /// Name of the document source, as given at parse time
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Root element
    pub fn root(&self) -> &XmlElement {
        &self.root
    }

    /// Locates a container element: the root itself if it has `name`,
    /// otherwise the first descendant with that name
    pub fn container(&self, name: &str) -> Option<&XmlElement> {
        if self.root.name == name {
            Some(&self.root)
        } else {
            self.root.descendant(name)
        }
    }
}

fn attach(
    stack: &mut [XmlElement],
    root: &mut Option<XmlElement>,
    element: XmlElement,
    source: &str,
) -> Result<()> {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(element);
    } else if root.is_none() {
        *root = Some(element);
    } else {
        return Err(FeretError::xml(source, "multiple root elements"));
    }
    Ok(())
}

fn element_from_start(reader: &Reader<&[u8]>, e: &BytesStart, source: &str) -> Result<XmlElement> {
    let decoder = reader.decoder();
    let name = decoder
        .decode(e.local_name().as_ref())
        .map_err(|err| FeretError::xml(source, err))?
        .to_string();

    let mut attributes = Vec::new();
    for attr in e.attributes() {
        let attr = attr.map_err(|err| FeretError::xml(source, err))?;
        // namespace declarations are not data
        if attr.key.as_ref().starts_with(b"xmlns") {
            continue;
        }
        let key = decoder
            .decode(attr.key.local_name().as_ref())
            .map_err(|err| FeretError::xml(source, err))?
            .to_string();
        let value = attr
            .unescape_value()
            .map_err(|err| FeretError::xml(source, err))?
            .to_string();
        attributes.push((key, value));
    }

    Ok(XmlElement {
        name,
        attributes,
        children: Vec::new(),
    })
}
