//! Interleaved vertex data packing
//!
//! [`VertexWriter`] fills a byte buffer with vertex data laid out according to
//! a [`VertexLayout`], converting `f32` inputs into each component's encoded
//! format. The packed buffer is uploaded as-is as a vertex buffer.

use glam::{Vec2, Vec3, Vec4};

use crate::format::{VertexAttr, VertexFormat};
use crate::layout::VertexLayout;

/// Packs per-attribute float data into an interleaved vertex buffer
#[derive(Debug, Clone)]
pub struct VertexWriter {
    layout: VertexLayout,
    data: Vec<u8>,
    num_vertices: usize,
}

impl VertexWriter {
    /// Zero-filled buffer for `num_vertices` vertices of `layout`
    pub fn new(layout: VertexLayout, num_vertices: usize) -> Self {
        let size = layout.byte_size() as usize * num_vertices;
        Self {
            layout,
            data: vec![0; size],
            num_vertices,
        }
    }

    pub fn layout(&self) -> &VertexLayout {
        &self.layout
    }

    pub fn num_vertices(&self) -> usize {
        self.num_vertices
    }

    /// Packed vertex data
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Consume the writer and take the packed buffer
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// Write one attribute of one vertex
    ///
    /// `values` must contain exactly as many scalars as the attribute's
    /// format has components. Panics when the vertex index is out of range,
    /// the attribute is not in the layout, or the scalar count is wrong.
    pub fn write(&mut self, vertex: usize, attr: VertexAttr, values: &[f32]) -> &mut Self {
        assert!(
            vertex < self.num_vertices,
            "vertex index {vertex} out of range ({} vertices)",
            self.num_vertices
        );
        let index = self
            .layout
            .component_index_by_attr(attr)
            .unwrap_or_else(|| panic!("attribute `{attr}` is not in the vertex layout"));
        let format = match self.layout.component_at(index).format {
            Some(format) => format,
            None => unreachable!("layout components are always valid"),
        };
        assert!(
            values.len() == format.component_count(),
            "attribute `{attr}` ({format}) expects {} scalars, got {}",
            format.component_count(),
            values.len()
        );
        let offset = vertex * self.layout.byte_size() as usize
            + self.layout.component_byte_offset(index) as usize;
        let dst = &mut self.data[offset..offset + format.byte_size() as usize];
        pack(format, values, dst);
        self
    }

    pub fn write_f32(&mut self, vertex: usize, attr: VertexAttr, value: f32) -> &mut Self {
        self.write(vertex, attr, &[value])
    }

    pub fn write_vec2(&mut self, vertex: usize, attr: VertexAttr, v: Vec2) -> &mut Self {
        self.write(vertex, attr, &v.to_array())
    }

    pub fn write_vec3(&mut self, vertex: usize, attr: VertexAttr, v: Vec3) -> &mut Self {
        self.write(vertex, attr, &v.to_array())
    }

    pub fn write_vec4(&mut self, vertex: usize, attr: VertexAttr, v: Vec4) -> &mut Self {
        self.write(vertex, attr, &v.to_array())
    }
}

/// Encode `values` into `dst` (exactly `format.byte_size()` bytes)
fn pack(format: VertexFormat, values: &[f32], dst: &mut [u8]) {
    match format {
        VertexFormat::Float | VertexFormat::Float2 | VertexFormat::Float3 | VertexFormat::Float4 => {
            dst.copy_from_slice(bytemuck::cast_slice(values));
        }
        VertexFormat::Byte4 => {
            for (i, &v) in values.iter().enumerate() {
                dst[i] = v.clamp(-128.0, 127.0) as i8 as u8;
            }
        }
        VertexFormat::Byte4N => {
            for (i, &v) in values.iter().enumerate() {
                dst[i] = (v.clamp(-1.0, 1.0) * 127.0).round() as i8 as u8;
            }
        }
        VertexFormat::UByte4 => {
            for (i, &v) in values.iter().enumerate() {
                dst[i] = v.clamp(0.0, 255.0) as u8;
            }
        }
        VertexFormat::UByte4N => {
            for (i, &v) in values.iter().enumerate() {
                dst[i] = (v.clamp(0.0, 1.0) * 255.0).round() as u8;
            }
        }
        VertexFormat::Short2 | VertexFormat::Short4 => {
            for (i, &v) in values.iter().enumerate() {
                let s = v.clamp(-32768.0, 32767.0) as i16;
                dst[i * 2..i * 2 + 2].copy_from_slice(&s.to_le_bytes());
            }
        }
        VertexFormat::Short2N | VertexFormat::Short4N => {
            for (i, &v) in values.iter().enumerate() {
                let s = (v.clamp(-1.0, 1.0) * 32767.0).round() as i16;
                dst[i * 2..i * 2 + 2].copy_from_slice(&s.to_le_bytes());
            }
        }
        VertexFormat::UInt10N2 => {
            let x = (values[0].clamp(0.0, 1.0) * 1023.0).round() as u32;
            let y = (values[1].clamp(0.0, 1.0) * 1023.0).round() as u32;
            let z = (values[2].clamp(0.0, 1.0) * 1023.0).round() as u32;
            let w = (values[3].clamp(0.0, 1.0) * 3.0).round() as u32;
            let packed = x | (y << 10) | (z << 20) | (w << 30);
            dst.copy_from_slice(&packed.to_le_bytes());
        }
    }
}
