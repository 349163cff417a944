//! Geometry and identity primitives shared by the scene object data shapes.
//!
//! JSON representations follow the iTwin platform conventions: points and vectors
//! are `{x, y, z}` objects, transforms are three rows of four numbers and element
//! identifiers are hexadecimal `Id64` strings.

use std::borrow::Cow;
use std::fmt::Display;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use schemars::{JsonSchema, Schema, SchemaGenerator, json_schema};
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;
use uuid::Uuid;

const ID64_PATTERN: &str = "^(0|0x[1-9a-f][0-9a-f]{0,15})$";

static ID64_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(ID64_PATTERN).expect("valid Id64 pattern"));

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid Id64 value: `{0}`")]
pub struct InvalidId64(pub String);

/// 64-bit element identifier in its canonical lowercase hexadecimal form, `"0"` being the invalid id
#[derive(Debug, Clone, Eq, PartialEq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Id64(String);

impl Id64 {
    pub const INVALID: &'static str = "0";

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_valid(&self) -> bool {
        self.0 != Self::INVALID
    }
}

impl FromStr for Id64 {
    type Err = InvalidId64;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if ID64_REGEX.is_match(s) {
            Ok(Self(s.to_owned()))
        } else {
            Err(InvalidId64(s.to_owned()))
        }
    }
}

impl From<u64> for Id64 {
    fn from(value: u64) -> Self {
        match value {
            0 => Self(Self::INVALID.to_owned()),
            value => Self(format!("{value:#x}")),
        }
    }
}

impl Display for Id64 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Id64 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(serde::de::Error::custom)
    }
}

impl JsonSchema for Id64 {
    fn schema_name() -> Cow<'static, str> {
        "Id64".into()
    }

    fn json_schema(_generator: &mut SchemaGenerator) -> Schema {
        json_schema!({
            "type": "string",
            "pattern": ID64_PATTERN,
        })
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Guid(Uuid);

impl Guid {
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
}

impl FromStr for Guid {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

impl From<Uuid> for Guid {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl Display for Guid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.0, f)
    }
}

/// RGB color with optional transparency (0 opaque, 255 fully transparent)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ColorDef {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub t: Option<u8>,
}

impl ColorDef {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, t: None }
    }

    /// Packs into the `0xTTBBGGRR` integer form used by display styles
    pub fn to_tbgr(&self) -> u32 {
        (u32::from(self.t.unwrap_or(0)) << 24)
            | (u32::from(self.b) << 16)
            | (u32::from(self.g) << 8)
            | u32::from(self.r)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
pub struct Point3d {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
pub struct Vector3d {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
pub struct Range3d {
    pub low: Point3d,
    pub high: Point3d,
}

/// Row-major 3x4 affine transform: rotation/scale in the first three columns, translation in the last
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct Transform(pub [[f64; 4]; 3]);

impl Transform {
    pub const IDENTITY: Transform = Transform([
        [1.0, 0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
    ]);

    pub fn origin(&self) -> Point3d {
        Point3d {
            x: self.0[0][3],
            y: self.0[1][3],
            z: self.0[2][3],
        }
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Plane keeping the half-space `normal · p >= distance`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ClipPlane {
    pub normal: Vector3d,
    pub distance: f64,
}
