use compact_str::CompactString;
use core::fmt;
use smallvec::SmallVec;

/// Name test of a single segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NodeNames {
    /// No name given; the segment matches on attributes or position only.
    Any,
    Single(CompactString),
    /// Alternation (`a|b`), always at least two non-empty names.
    OneOf(SmallVec<[CompactString; 4]>),
}

impl NodeNames {
    pub fn single(&self) -> Option<&str> {
        match self {
            NodeNames::Single(name) => Some(name.as_str()),
            _ => None,
        }
    }

    pub fn matches(&self, name: Option<&str>) -> bool {
        match (self, name) {
            (NodeNames::Any, _) => true,
            (NodeNames::Single(want), Some(have)) => want.as_str() == have,
            (NodeNames::OneOf(want), Some(have)) => want.iter().any(|w| w.as_str() == have),
            (_, None) => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AttributeFilter {
    pub name: CompactString,
    /// `None` tests presence only.
    pub value: Option<String>,
}

/// One parsed path segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Selector {
    pub names: NodeNames,
    pub is_id: bool,
    pub is_direct_child: bool,
    pub attribute: Option<AttributeFilter>,
    pub index: Option<usize>,
}

impl Selector {
    /// Plain descendant segment matching a single element name.
    pub fn named(name: &str) -> Self {
        Self {
            names: NodeNames::Single(name.into()),
            is_id: false,
            is_direct_child: false,
            attribute: None,
            index: None,
        }
    }

    /// Copy with `is_id`/`is_direct_child` cleared so the segment matches
    /// anywhere below a root.
    pub fn unanchored(&self) -> Self {
        Self { is_id: false, is_direct_child: false, ..self.clone() }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_id {
            f.write_str("#")?;
        } else if self.is_direct_child {
            f.write_str(">")?;
        }
        match &self.names {
            NodeNames::Any => {}
            NodeNames::Single(name) => f.write_str(name)?,
            NodeNames::OneOf(names) => {
                for (i, name) in names.iter().enumerate() {
                    if i > 0 {
                        f.write_str("|")?;
                    }
                    f.write_str(name)?;
                }
            }
        }
        if let Some(attr) = &self.attribute {
            match &attr.value {
                Some(value) => write!(f, "[{}=\"{}\"]", attr.name, value)?,
                None => write!(f, "[{}]", attr.name)?,
            }
        }
        if let Some(index) = self.index {
            write!(f, "({index})")?;
        }
        Ok(())
    }
}

/// Ordered selector sequence; left is ancestor-ward.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Path {
    selectors: Vec<Selector>,
}

impl Path {
    pub fn new(selectors: Vec<Selector>) -> Self {
        Self { selectors }
    }

    pub fn selectors(&self) -> &[Selector] {
        &self.selectors
    }

    pub fn len(&self) -> usize {
        self.selectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selectors.is_empty()
    }
}

impl From<Selector> for Path {
    fn from(selector: Selector) -> Self {
        Self { selectors: vec![selector] }
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, s) in self.selectors.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{s}")?;
        }
        Ok(())
    }
}
