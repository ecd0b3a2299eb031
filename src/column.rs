//! The column capability set the core consumes (§6), and the minimal owned
//! representation ([`ColumnData`]) this crate provides so that `read_table`
//! has something concrete to hand back and `save_table` has something
//! concrete to round-trip tests against.
//!
//! Column construction, mutation, iteration, and conversion between column
//! kinds are out of scope for the storage engine — those belong to whatever
//! in-memory table library a caller brings. The engine only needs the view
//! in [`ColumnSource::view`] to encode a column, and a matching owned
//! variant to decode one into.

pub mod scalar;
pub mod string;
pub mod text;

pub use string::StringDictionary;

use crate::types::ColumnType;

/// The capability set an external column implementation must provide.
pub trait ColumnSource {
    fn column_type(&self) -> ColumnType;
    fn name(&self) -> &str;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// A borrowed, typed view of the column's values, used by the codec
    /// dispatched on `column_type()`.
    fn view(&self) -> ColumnView<'_>;
}

/// A tagged union over the borrowed value slices a codec writes from.
///
/// Matching the recommendation in the design notes: the sum type carries
/// the typed payload, and codec dispatch is a pattern match on the variant
/// rather than a runtime type check.
pub enum ColumnView<'a> {
    Float(&'a [f32]),
    Double(&'a [f64]),
    Integer(&'a [i32]),
    Short(&'a [i16]),
    Long(&'a [i64]),
    /// Tri-state byte per row: nonzero-true, zero-false, or a sentinel the
    /// external column chooses for "missing" — the codec preserves the byte
    /// verbatim without interpreting it.
    Boolean(&'a [i8]),
    LocalDate(&'a [i32]),
    LocalTime(&'a [i32]),
    LocalDateTime(&'a [i64]),
    Instant(&'a [i64]),
    Text(&'a [String]),
    String(&'a StringDictionary),
}

/// The minimal owned column representation this crate provides: enough to
/// be the output of `read_table` and, because it implements
/// [`ColumnSource`], enough to be fed straight back into `save_table`.
pub struct ColumnData {
    name: String,
    kind: ColumnKind,
}

enum ColumnKind {
    Float(Vec<f32>),
    Double(Vec<f64>),
    Integer(Vec<i32>),
    Short(Vec<i16>),
    Long(Vec<i64>),
    Boolean(Vec<i8>),
    LocalDate(Vec<i32>),
    LocalTime(Vec<i32>),
    LocalDateTime(Vec<i64>),
    Instant(Vec<i64>),
    Text(Vec<String>),
    String(StringDictionary),
}

macro_rules! ctor {
    ($ctor:ident, $variant:ident, $elem:ty) => {
        pub fn $ctor(name: impl Into<String>, values: Vec<$elem>) -> Self {
            ColumnData {
                name: name.into(),
                kind: ColumnKind::$variant(values),
            }
        }
    };
}

impl ColumnData {
    ctor!(float, Float, f32);
    ctor!(double, Double, f64);
    ctor!(integer, Integer, i32);
    ctor!(short, Short, i16);
    ctor!(long, Long, i64);
    ctor!(boolean, Boolean, i8);
    ctor!(local_date, LocalDate, i32);
    ctor!(local_time, LocalTime, i32);
    ctor!(local_date_time, LocalDateTime, i64);
    ctor!(instant, Instant, i64);
    ctor!(text, Text, String);

    pub fn string(name: impl Into<String>, dictionary: StringDictionary) -> Self {
        ColumnData {
            name: name.into(),
            kind: ColumnKind::String(dictionary),
        }
    }

    /// Builds a `LOCAL_DATE` column from `chrono` dates, packing each as
    /// days since the Unix epoch (see [`crate::temporal`]).
    pub fn local_date_from_dates(name: impl Into<String>, dates: &[chrono::NaiveDate]) -> Self {
        Self::local_date(name, dates.iter().map(|d| crate::temporal::date_to_epoch_day(*d)).collect())
    }

    /// Builds a `LOCAL_TIME` column from `chrono` times, packing each as
    /// milliseconds since midnight.
    pub fn local_time_from_times(name: impl Into<String>, times: &[chrono::NaiveTime]) -> Self {
        Self::local_time(name, times.iter().map(|t| crate::temporal::time_to_millis(*t)).collect())
    }

    /// Builds a `LOCAL_DATE_TIME` column from `chrono` naive date-times,
    /// packing each as milliseconds since the Unix epoch.
    pub fn local_date_time_from_date_times(name: impl Into<String>, date_times: &[chrono::NaiveDateTime]) -> Self {
        Self::local_date_time(
            name,
            date_times.iter().map(|dt| crate::temporal::date_time_to_millis(*dt)).collect(),
        )
    }

    /// Builds an `INSTANT` column from `chrono` UTC instants, packing each
    /// as milliseconds since the Unix epoch.
    pub fn instant_from_instants(name: impl Into<String>, instants: &[chrono::DateTime<chrono::Utc>]) -> Self {
        Self::instant(
            name,
            instants.iter().map(|i| crate::temporal::instant_to_millis(*i)).collect(),
        )
    }
}

impl ColumnSource for ColumnData {
    fn column_type(&self) -> ColumnType {
        match &self.kind {
            ColumnKind::Float(_) => ColumnType::Float,
            ColumnKind::Double(_) => ColumnType::Double,
            ColumnKind::Integer(_) => ColumnType::Integer,
            ColumnKind::Short(_) => ColumnType::Short,
            ColumnKind::Long(_) => ColumnType::Long,
            ColumnKind::Boolean(_) => ColumnType::Boolean,
            ColumnKind::LocalDate(_) => ColumnType::LocalDate,
            ColumnKind::LocalTime(_) => ColumnType::LocalTime,
            ColumnKind::LocalDateTime(_) => ColumnType::LocalDateTime,
            ColumnKind::Instant(_) => ColumnType::Instant,
            ColumnKind::Text(_) => ColumnType::Text,
            ColumnKind::String(_) => ColumnType::String,
        }
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn len(&self) -> usize {
        match &self.kind {
            ColumnKind::Float(v) => v.len(),
            ColumnKind::Double(v) => v.len(),
            ColumnKind::Integer(v) => v.len(),
            ColumnKind::Short(v) => v.len(),
            ColumnKind::Long(v) => v.len(),
            ColumnKind::Boolean(v) => v.len(),
            ColumnKind::LocalDate(v) => v.len(),
            ColumnKind::LocalTime(v) => v.len(),
            ColumnKind::LocalDateTime(v) => v.len(),
            ColumnKind::Instant(v) => v.len(),
            ColumnKind::Text(v) => v.len(),
            ColumnKind::String(d) => d.values.len(),
        }
    }

    fn view(&self) -> ColumnView<'_> {
        match &self.kind {
            ColumnKind::Float(v) => ColumnView::Float(v),
            ColumnKind::Double(v) => ColumnView::Double(v),
            ColumnKind::Integer(v) => ColumnView::Integer(v),
            ColumnKind::Short(v) => ColumnView::Short(v),
            ColumnKind::Long(v) => ColumnView::Long(v),
            ColumnKind::Boolean(v) => ColumnView::Boolean(v),
            ColumnKind::LocalDate(v) => ColumnView::LocalDate(v),
            ColumnKind::LocalTime(v) => ColumnView::LocalTime(v),
            ColumnKind::LocalDateTime(v) => ColumnView::LocalDateTime(v),
            ColumnKind::Instant(v) => ColumnView::Instant(v),
            ColumnKind::Text(v) => ColumnView::Text(v),
            ColumnKind::String(d) => ColumnView::String(d),
        }
    }
}
