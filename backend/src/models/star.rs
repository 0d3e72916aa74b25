//! Star records and the column layout that describes them.
//!
//! A [`StarRecord`] is a flat row of numbers: the sequential id followed by one
//! value per requested column. [`ColumnLayout`] maps column roles to positions
//! in that row and grows when a derived column (distance) is appended.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{FovError, FovResult};

/// Header name of the right ascension column.
pub const RA_COLUMN: &str = "ra_ep2000";
/// Header name of the declination column.
pub const DEC_COLUMN: &str = "dec_ep2000";
/// Header name of the brightness (magnitude) column.
pub const BRIGHTNESS_COLUMN: &str = "b";
/// Name of the derived distance column.
pub const DISTANCE_COLUMN: &str = "distance";
/// Name of the sequential identifier column.
pub const ID_COLUMN: &str = "id";

/// Semantic role of one position in a [`StarRecord`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ColumnRole {
    Id,
    RightAscension,
    Declination,
    Brightness,
    Distance,
    /// Any other numeric catalog column, by header name
    Other(String),
}

impl ColumnRole {
    /// Resolve a header name to a role.
    pub fn from_name(name: &str) -> Self {
        match name {
            ID_COLUMN => Self::Id,
            RA_COLUMN => Self::RightAscension,
            DEC_COLUMN => Self::Declination,
            BRIGHTNESS_COLUMN => Self::Brightness,
            DISTANCE_COLUMN => Self::Distance,
            other => Self::Other(other.to_string()),
        }
    }

    /// Header name for this role.
    pub fn name(&self) -> &str {
        match self {
            Self::Id => ID_COLUMN,
            Self::RightAscension => RA_COLUMN,
            Self::Declination => DEC_COLUMN,
            Self::Brightness => BRIGHTNESS_COLUMN,
            Self::Distance => DISTANCE_COLUMN,
            Self::Other(name) => name,
        }
    }
}

impl fmt::Display for ColumnRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<String> for ColumnRole {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

impl From<ColumnRole> for String {
    fn from(role: ColumnRole) -> Self {
        role.name().to_string()
    }
}

/// Ordered column roles; the index of a role is its position in every record.
///
/// Position 0 is always [`ColumnRole::Id`]. Positions are contiguous and each
/// role appears at most once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnLayout {
    slots: Vec<ColumnRole>,
}

impl Default for ColumnLayout {
    fn default() -> Self {
        Self::new()
    }
}

impl ColumnLayout {
    /// Layout holding only the id column.
    pub fn new() -> Self {
        Self {
            slots: vec![ColumnRole::Id],
        }
    }

    /// Layout `[id, names...]` in request order.
    ///
    /// # Errors
    /// [`FovError::DuplicateColumn`] if a name is requested twice (or names `id`).
    pub fn from_requested<S: AsRef<str>>(names: &[S]) -> FovResult<Self> {
        let mut layout = Self::new();
        for name in names {
            layout.push(ColumnRole::from_name(name.as_ref()))?;
        }
        Ok(layout)
    }

    /// Append a role at the next free position and return that position.
    pub fn push(&mut self, role: ColumnRole) -> FovResult<usize> {
        if self.slots.contains(&role) {
            return Err(FovError::duplicate_column(role.name()));
        }
        self.slots.push(role);
        Ok(self.slots.len() - 1)
    }

    pub fn position(&self, role: &ColumnRole) -> Option<usize> {
        self.slots.iter().position(|r| r == role)
    }

    /// Position of `role`, or [`FovError::ColumnNotFound`].
    pub fn require(&self, role: &ColumnRole) -> FovResult<usize> {
        self.position(role)
            .ok_or_else(|| FovError::column_not_found(role.name()))
    }

    pub fn contains(&self, role: &ColumnRole) -> bool {
        self.position(role).is_some()
    }

    /// Number of positions, id included.
    pub fn width(&self) -> usize {
        self.slots.len()
    }

    pub fn roles(&self) -> &[ColumnRole] {
        &self.slots
    }

    /// Roles after the id column, i.e. the projected catalog fields.
    pub fn field_roles(&self) -> &[ColumnRole] {
        &self.slots[1..]
    }
}

/// One star: `[id, field_1, ..., field_k]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StarRecord {
    /// 1-based data row number in the source table
    pub id: usize,
    pub fields: Vec<f64>,
}

impl StarRecord {
    pub fn new(id: usize, fields: Vec<f64>) -> Self {
        Self { id, fields }
    }

    /// Value at a layout position; position 0 is the id.
    pub fn value(&self, position: usize) -> Option<f64> {
        match position {
            0 => Some(self.id as f64),
            p => self.fields.get(p - 1).copied(),
        }
    }

    /// Number of positions, id included.
    pub fn width(&self) -> usize {
        self.fields.len() + 1
    }

    pub fn push_field(&mut self, value: f64) {
        self.fields.push(value);
    }
}

/// Records together with the layout they follow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StarTable {
    pub layout: ColumnLayout,
    pub records: Vec<StarRecord>,
}

impl StarTable {
    pub fn new(layout: ColumnLayout, records: Vec<StarRecord>) -> Self {
        Self { layout, records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// True when every record has exactly one value per layout position.
    pub fn is_consistent(&self) -> bool {
        let width = self.layout.width();
        self.records.iter().all(|r| r.width() == width)
    }

    /// Values of one column across all records.
    pub fn column(&self, role: &ColumnRole) -> FovResult<Vec<f64>> {
        let pos = self.layout.require(role)?;
        Ok(self
            .records
            .iter()
            .filter_map(|r| r.value(pos))
            .collect())
    }

    pub fn ids(&self) -> Vec<usize> {
        self.records.iter().map(|r| r.id).collect()
    }
}
