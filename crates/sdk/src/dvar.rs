//! Dvar type definitions
//!
//! This module provides the type definitions shared with the variable
//! storage subsystem: the value-kind tag, the raw limits union it hands
//! out, and the tagged [`DvarDomain`] the rest of the workspace works with.

use std::ffi::{c_char, CStr};

/// Dvar value kind
///
/// Maps to the storage subsystem's `dvar_type` tag.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DvarType {
    Boolean = 0,
    Value = 1,
    Vec2 = 2,
    Vec3 = 3,
    Vec4 = 4,
    Integer = 5,
    String = 6,
    Enumeration = 7,
    Color = 8,
    Rgb = 9,
}

impl DvarType {
    /// Convert a raw type tag into a known kind
    ///
    /// Returns None for tags this crate doesn't know about.
    pub const fn from_raw(tag: i32) -> Option<Self> {
        Some(match tag {
            0 => Self::Boolean,
            1 => Self::Value,
            2 => Self::Vec2,
            3 => Self::Vec3,
            4 => Self::Vec4,
            5 => Self::Integer,
            6 => Self::String,
            7 => Self::Enumeration,
            8 => Self::Color,
            9 => Self::Rgb,
            _ => return None,
        })
    }

    /// The raw tag value
    pub const fn as_raw(self) -> i32 {
        self as i32
    }

    /// Number of float components for vector-like kinds
    pub fn components(&self) -> Option<u8> {
        match self {
            Self::Vec2 => Some(2),
            Self::Vec3 | Self::Rgb => Some(3),
            Self::Vec4 | Self::Color => Some(4),
            _ => None,
        }
    }
}

/// Float bounds for value and vector dvars
///
/// `-f32::MAX` and `f32::MAX` mean "no bound" on that side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatBounds {
    pub min: f32,
    pub max: f32,
}

impl FloatBounds {
    /// Sentinel for an open lower bound
    pub const UNBOUNDED_MIN: f32 = -f32::MAX;
    /// Sentinel for an open upper bound
    pub const UNBOUNDED_MAX: f32 = f32::MAX;

    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Bounds with neither side limited
    pub const fn unbounded() -> Self {
        Self::new(Self::UNBOUNDED_MIN, Self::UNBOUNDED_MAX)
    }

    /// Exact comparison against the sentinel
    pub fn has_min(&self) -> bool {
        self.min != Self::UNBOUNDED_MIN
    }

    /// Exact comparison against the sentinel
    pub fn has_max(&self) -> bool {
        self.max != Self::UNBOUNDED_MAX
    }
}

impl Default for FloatBounds {
    fn default() -> Self {
        Self::unbounded()
    }
}

/// Integer bounds
///
/// `i32::MIN` and `i32::MAX` mean "no bound" on that side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntBounds {
    pub min: i32,
    pub max: i32,
}

impl IntBounds {
    pub const UNBOUNDED_MIN: i32 = i32::MIN;
    pub const UNBOUNDED_MAX: i32 = i32::MAX;

    pub const fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    pub const fn unbounded() -> Self {
        Self::new(Self::UNBOUNDED_MIN, Self::UNBOUNDED_MAX)
    }

    pub fn has_min(&self) -> bool {
        self.min != Self::UNBOUNDED_MIN
    }

    pub fn has_max(&self) -> bool {
        self.max != Self::UNBOUNDED_MAX
    }
}

impl Default for IntBounds {
    fn default() -> Self {
        Self::unbounded()
    }
}

/// Legal-value domain of a dvar, one variant per kind
///
/// Plain integers and enumerations are separate variants; nothing is
/// inferred from sentinel values in a shared field.
#[derive(Debug, Clone, PartialEq)]
pub enum DvarDomain {
    Boolean,
    Value(FloatBounds),
    Vec2(FloatBounds),
    Vec3(FloatBounds),
    Vec4(FloatBounds),
    Rgb(FloatBounds),
    /// Always full range per channel
    Color,
    Integer(IntBounds),
    /// Ordered choice strings, selected by index
    Enumeration(Vec<String>),
    String,
}

impl DvarDomain {
    /// The kind this domain belongs to
    pub fn kind(&self) -> DvarType {
        match self {
            Self::Boolean => DvarType::Boolean,
            Self::Value(_) => DvarType::Value,
            Self::Vec2(_) => DvarType::Vec2,
            Self::Vec3(_) => DvarType::Vec3,
            Self::Vec4(_) => DvarType::Vec4,
            Self::Rgb(_) => DvarType::Rgb,
            Self::Color => DvarType::Color,
            Self::Integer(_) => DvarType::Integer,
            Self::Enumeration(_) => DvarType::Enumeration,
            Self::String => DvarType::String,
        }
    }

    /// Decode a raw type tag and limits union
    ///
    /// Returns None if the tag is not a known [`DvarType`]. Which union
    /// member is read is decided by the tag alone.
    ///
    /// # Safety
    /// For [`DvarType::Enumeration`], `raw.enumeration.strings` must point to
    /// at least `string_count` valid, null-terminated C strings.
    pub unsafe fn from_raw(tag: i32, raw: &RawDvarLimits) -> Option<Self> {
        let kind = DvarType::from_raw(tag)?;

        let domain = match kind {
            DvarType::Boolean => Self::Boolean,
            DvarType::String => Self::String,
            DvarType::Color => Self::Color,
            DvarType::Value => Self::Value(FloatBounds::new(raw.value.min, raw.value.max)),
            DvarType::Vec2 => Self::Vec2(FloatBounds::new(raw.vector.min, raw.vector.max)),
            DvarType::Vec3 => Self::Vec3(FloatBounds::new(raw.vector.min, raw.vector.max)),
            DvarType::Vec4 => Self::Vec4(FloatBounds::new(raw.vector.min, raw.vector.max)),
            DvarType::Rgb => Self::Rgb(FloatBounds::new(raw.vector.min, raw.vector.max)),
            DvarType::Integer => Self::Integer(IntBounds::new(raw.integer.min, raw.integer.max)),
            DvarType::Enumeration => {
                let count = raw.enumeration.string_count.max(0) as usize;
                let strings = raw.enumeration.strings;

                let mut choices = Vec::with_capacity(count);
                if !strings.is_null() {
                    for i in 0..count {
                        let ptr = *strings.add(i);
                        if ptr.is_null() {
                            choices.push(String::new());
                        } else {
                            choices.push(CStr::from_ptr(ptr).to_string_lossy().into_owned());
                        }
                    }
                }
                Self::Enumeration(choices)
            }
        };

        Some(domain)
    }
}

/// Raw enumeration limits
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct RawEnumLimits {
    pub string_count: i32,
    pub strings: *const *const c_char,
}

/// Raw integer limits
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct RawIntLimits {
    pub min: i32,
    pub max: i32,
}

/// Raw float limits (value and vector kinds)
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct RawFloatLimits {
    pub min: f32,
    pub max: f32,
}

/// Limits union as laid out by the storage subsystem
///
/// `enumeration.string_count` shares its bytes with `integer.min`, so the
/// type tag has to be consulted before reading any member.
#[repr(C)]
#[derive(Clone, Copy)]
pub union RawDvarLimits {
    pub enumeration: RawEnumLimits,
    pub integer: RawIntLimits,
    pub value: RawFloatLimits,
    pub vector: RawFloatLimits,
}

impl Default for RawDvarLimits {
    fn default() -> Self {
        Self {
            enumeration: RawEnumLimits {
                string_count: 0,
                strings: std::ptr::null(),
            },
        }
    }
}

impl std::fmt::Debug for RawDvarLimits {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Tag unknown here, show the integer view
        f.debug_struct("RawDvarLimits")
            .field("raw", unsafe { &self.integer })
            .finish()
    }
}

/// A typed dvar value
#[derive(Debug, Clone, PartialEq)]
pub enum DvarValue {
    Bool(bool),
    Int(i32),
    Float(f32),
    String(String),
    Vec4([f32; 4]),
    /// Index into the enumeration's choices
    Enum(i32),
}

impl DvarValue {
    /// Get value as bool, if it is one
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Get value as i32 (integers and enumeration indices)
    pub fn as_int(&self) -> Option<i32> {
        match self {
            Self::Int(v) | Self::Enum(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f32> {
        match self {
            Self::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }
}
