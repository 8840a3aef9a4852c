//! Closed vertex attribute and data format enumerations

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Error parsing an attribute or format from its canonical name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown vertex attribute `{0}`")]
    UnknownAttr(String),
    #[error("unknown vertex format `{0}`")]
    UnknownFormat(String),
}

/// Semantic vertex attribute codes
///
/// This is a closed set: the reverse-lookup table inside a layout is sized to
/// `VertexAttr::COUNT`, and shader reflection matches attributes by their
/// canonical lower-case names (see [`VertexAttr::name`]).
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VertexAttr {
    Position = 0,
    Normal,
    TexCoord0,
    TexCoord1,
    TexCoord2,
    TexCoord3,
    Tangent,
    Binormal,
    Weights,
    Indices,
    Color0,
    Color1,
    Instance0,
    Instance1,
    Instance2,
    Instance3,
}

impl VertexAttr {
    /// Number of distinct attribute codes
    pub const COUNT: usize = 16;

    /// All attribute codes in declaration order
    pub const ALL: [VertexAttr; Self::COUNT] = [
        VertexAttr::Position,
        VertexAttr::Normal,
        VertexAttr::TexCoord0,
        VertexAttr::TexCoord1,
        VertexAttr::TexCoord2,
        VertexAttr::TexCoord3,
        VertexAttr::Tangent,
        VertexAttr::Binormal,
        VertexAttr::Weights,
        VertexAttr::Indices,
        VertexAttr::Color0,
        VertexAttr::Color1,
        VertexAttr::Instance0,
        VertexAttr::Instance1,
        VertexAttr::Instance2,
        VertexAttr::Instance3,
    ];

    /// Canonical name, as used by shader reflection
    pub fn name(&self) -> &'static str {
        match self {
            VertexAttr::Position => "position",
            VertexAttr::Normal => "normal",
            VertexAttr::TexCoord0 => "texcoord0",
            VertexAttr::TexCoord1 => "texcoord1",
            VertexAttr::TexCoord2 => "texcoord2",
            VertexAttr::TexCoord3 => "texcoord3",
            VertexAttr::Tangent => "tangent",
            VertexAttr::Binormal => "binormal",
            VertexAttr::Weights => "weights",
            VertexAttr::Indices => "indices",
            VertexAttr::Color0 => "color0",
            VertexAttr::Color1 => "color1",
            VertexAttr::Instance0 => "instance0",
            VertexAttr::Instance1 => "instance1",
            VertexAttr::Instance2 => "instance2",
            VertexAttr::Instance3 => "instance3",
        }
    }
}

impl fmt::Display for VertexAttr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for VertexAttr {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|attr| attr.name() == s)
            .ok_or_else(|| ParseError::UnknownAttr(s.to_string()))
    }
}

/// Vertex data format codes
///
/// A `*N` suffix means the integer data is normalized: the shader sees values
/// scaled into `[-1, 1]` (signed) or `[0, 1]` (unsigned).
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VertexFormat {
    Float = 0,
    Float2,
    Float3,
    Float4,
    Byte4,
    Byte4N,
    UByte4,
    UByte4N,
    Short2,
    Short2N,
    Short4,
    Short4N,
    UInt10N2,
}

impl VertexFormat {
    /// All format codes in declaration order
    pub const ALL: [VertexFormat; 13] = [
        VertexFormat::Float,
        VertexFormat::Float2,
        VertexFormat::Float3,
        VertexFormat::Float4,
        VertexFormat::Byte4,
        VertexFormat::Byte4N,
        VertexFormat::UByte4,
        VertexFormat::UByte4N,
        VertexFormat::Short2,
        VertexFormat::Short2N,
        VertexFormat::Short4,
        VertexFormat::Short4N,
        VertexFormat::UInt10N2,
    ];

    /// Encoded size in bytes
    pub fn byte_size(&self) -> u32 {
        match self {
            VertexFormat::Float => 4,
            VertexFormat::Float2 => 8,
            VertexFormat::Float3 => 12,
            VertexFormat::Float4 => 16,
            VertexFormat::Byte4
            | VertexFormat::Byte4N
            | VertexFormat::UByte4
            | VertexFormat::UByte4N => 4,
            VertexFormat::Short2 | VertexFormat::Short2N => 4,
            VertexFormat::Short4 | VertexFormat::Short4N => 8,
            VertexFormat::UInt10N2 => 4,
        }
    }

    /// Number of scalar components (1..=4)
    pub fn component_count(&self) -> usize {
        match self {
            VertexFormat::Float => 1,
            VertexFormat::Float2 | VertexFormat::Short2 | VertexFormat::Short2N => 2,
            VertexFormat::Float3 => 3,
            VertexFormat::Float4
            | VertexFormat::Byte4
            | VertexFormat::Byte4N
            | VertexFormat::UByte4
            | VertexFormat::UByte4N
            | VertexFormat::Short4
            | VertexFormat::Short4N
            | VertexFormat::UInt10N2 => 4,
        }
    }

    /// Canonical name
    pub fn name(&self) -> &'static str {
        match self {
            VertexFormat::Float => "float",
            VertexFormat::Float2 => "float2",
            VertexFormat::Float3 => "float3",
            VertexFormat::Float4 => "float4",
            VertexFormat::Byte4 => "byte4",
            VertexFormat::Byte4N => "byte4n",
            VertexFormat::UByte4 => "ubyte4",
            VertexFormat::UByte4N => "ubyte4n",
            VertexFormat::Short2 => "short2",
            VertexFormat::Short2N => "short2n",
            VertexFormat::Short4 => "short4",
            VertexFormat::Short4N => "short4n",
            VertexFormat::UInt10N2 => "uint10n2",
        }
    }
}

impl fmt::Display for VertexFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for VertexFormat {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|format| format.name() == s)
            .ok_or_else(|| ParseError::UnknownFormat(s.to_string()))
    }
}

/// Whether an attribute advances per vertex or per rendered instance
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VertexStepFunction {
    #[default]
    PerVertex = 0,
    PerInstance,
}
