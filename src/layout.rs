//! Fixed-capacity vertex layout descriptors
//!
//! A [`VertexLayout`] describes how a single vertex's attributes are packed
//! inside a contiguous buffer. The buffer/pipeline subsystem reads strides and
//! byte offsets from it, and keys pipeline-state caches on [`VertexLayout::hash`]
//! and [`VertexLayout::combined_hash`].
//!
//! Layouts are plain values with inline storage: no heap allocation, cheap to
//! copy, safe to share read-only across threads.

use crate::format::{VertexAttr, VertexFormat, VertexStepFunction};

/// Maximum number of components in a single vertex layout
pub const MAX_COMPONENTS: usize = 16;

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

fn fnv1a(mut hash: u64, bytes: &[u8]) -> u64 {
    for &b in bytes {
        hash ^= b as u64;
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash
}

/// One attribute slot in a vertex layout
///
/// A default-constructed component is invalid (attribute and format unset);
/// only valid components can be added to a layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Component {
    pub attr: Option<VertexAttr>,
    pub format: Option<VertexFormat>,
    /// Vertex-buffer binding slot this component reads from
    pub slot_index: u8,
    pub step_function: VertexStepFunction,
    /// Instance step rate; 0 for per-vertex components
    pub step_rate: u8,
}

impl Component {
    /// Per-vertex component reading from buffer slot 0
    pub fn new(attr: VertexAttr, format: VertexFormat) -> Self {
        Self::with_slot(attr, format, 0)
    }

    /// Per-vertex component reading from the given buffer slot
    pub fn with_slot(attr: VertexAttr, format: VertexFormat, slot_index: u8) -> Self {
        Self {
            attr: Some(attr),
            format: Some(format),
            slot_index,
            step_function: VertexStepFunction::PerVertex,
            step_rate: 0,
        }
    }

    /// Per-instance component with step rate 1
    pub fn instanced(attr: VertexAttr, format: VertexFormat, slot_index: u8) -> Self {
        Self {
            step_function: VertexStepFunction::PerInstance,
            step_rate: 1,
            ..Self::with_slot(attr, format, slot_index)
        }
    }

    /// True when attribute and format are set
    pub fn is_valid(&self) -> bool {
        self.attr.is_some()
    }

    /// Unset attribute and format; slot and step settings are kept
    pub fn clear(&mut self) {
        self.attr = None;
        self.format = None;
    }

    /// Encoded size in bytes, 0 when invalid
    pub fn byte_size(&self) -> u32 {
        self.format.map_or(0, |format| format.byte_size())
    }
}

/// Ordered, fixed-capacity set of vertex components with derived offsets
///
/// Mutation is strictly additive until [`clear`](VertexLayout::clear); all
/// mutators consume and return `self` so layouts can be built in one chained
/// expression:
///
/// ```
/// use vertex_layout::{VertexAttr, VertexFormat, VertexLayout};
///
/// let layout = VertexLayout::new()
///     .add(VertexAttr::Position, VertexFormat::Float3)
///     .add(VertexAttr::Normal, VertexFormat::Float3)
///     .add(VertexAttr::TexCoord0, VertexFormat::Float2);
/// assert_eq!(layout.byte_size(), 32);
/// ```
///
/// Constraint violations (capacity overflow, duplicate attribute, invalid
/// component, out-of-range index) are programming errors and panic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexLayout {
    comps: [Component; MAX_COMPONENTS],
    byte_offsets: [u32; MAX_COMPONENTS],
    /// Reverse map: attribute code to component index
    attr_comp_indices: [Option<u8>; VertexAttr::COUNT],
    num_comps: usize,
    byte_size: u32,
}

impl Default for VertexLayout {
    fn default() -> Self {
        Self::new()
    }
}

impl VertexLayout {
    /// Empty layout
    pub fn new() -> Self {
        Self {
            comps: [Component::default(); MAX_COMPONENTS],
            byte_offsets: [0; MAX_COMPONENTS],
            attr_comp_indices: [None; VertexAttr::COUNT],
            num_comps: 0,
            byte_size: 0,
        }
    }

    /// Reset to the empty state
    pub fn clear(self) -> Self {
        Self::new()
    }

    /// Append a component; its byte offset is the layout's current byte size
    ///
    /// Panics when the component is invalid, its attribute is already present,
    /// or the layout is full.
    pub fn add_component(mut self, comp: Component) -> Self {
        let (Some(attr), Some(format)) = (comp.attr, comp.format) else {
            panic!("cannot add an unset component to a vertex layout");
        };
        assert!(
            self.attr_comp_indices[attr as usize].is_none(),
            "attribute `{attr}` is already present in the vertex layout"
        );
        assert!(
            self.num_comps < MAX_COMPONENTS,
            "vertex layout capacity ({MAX_COMPONENTS} components) exceeded"
        );
        let index = self.num_comps;
        self.comps[index] = comp;
        self.byte_offsets[index] = self.byte_size;
        self.attr_comp_indices[attr as usize] = Some(index as u8);
        self.byte_size += format.byte_size();
        self.num_comps += 1;
        self
    }

    /// Append a per-vertex component reading from buffer slot 0
    pub fn add(self, attr: VertexAttr, format: VertexFormat) -> Self {
        self.add_component(Component::new(attr, format))
    }

    /// Append a per-vertex component reading from the given buffer slot
    pub fn add_with_slot(self, attr: VertexAttr, format: VertexFormat, slot_index: u8) -> Self {
        self.add_component(Component::with_slot(attr, format, slot_index))
    }

    /// Append a per-instance component (step rate 1)
    pub fn add_instanced(self, attr: VertexAttr, format: VertexFormat, slot_index: u8) -> Self {
        self.add_component(Component::instanced(attr, format, slot_index))
    }

    /// Append every component of `other` in order
    ///
    /// Format, slot and step settings are preserved; byte offsets are
    /// recomputed relative to this layout's current size. Panics when an
    /// attribute of `other` is already present or capacity is exceeded.
    pub fn append(mut self, other: &VertexLayout) -> Self {
        for comp in other.components() {
            self = self.add_component(*comp);
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.num_comps == 0
    }

    pub fn num_components(&self) -> usize {
        self.num_comps
    }

    /// Occupied components in order
    pub fn components(&self) -> &[Component] {
        &self.comps[..self.num_comps]
    }

    /// Component at `index`; panics when out of range
    pub fn component_at(&self, index: usize) -> &Component {
        assert!(
            index < self.num_comps,
            "component index {index} out of range ({} components)",
            self.num_comps
        );
        &self.comps[index]
    }

    /// Index of the component carrying `attr`, if present
    pub fn component_index_by_attr(&self, attr: VertexAttr) -> Option<usize> {
        self.attr_comp_indices[attr as usize].map(usize::from)
    }

    pub fn contains(&self, attr: VertexAttr) -> bool {
        self.attr_comp_indices[attr as usize].is_some()
    }

    /// Byte size of one vertex record (the stride)
    pub fn byte_size(&self) -> u32 {
        self.byte_size
    }

    /// Byte offset of the component at `index` within one vertex record
    pub fn component_byte_offset(&self, index: usize) -> u32 {
        assert!(
            index < self.num_comps,
            "component index {index} out of range ({} components)",
            self.num_comps
        );
        self.byte_offsets[index]
    }

    /// Stable 64-bit hash over the ordered component sequence
    ///
    /// Two layouts with identical component sequences always hash identically;
    /// layouts differing in order, count or any field hash differently with
    /// high probability. Suitable as a pipeline-state cache key within one
    /// process; the bit pattern is not a persistence format.
    pub fn hash(&self) -> u64 {
        let mut hash = FNV_OFFSET_BASIS;
        for comp in self.components() {
            let fields = [
                comp.attr.map_or(u8::MAX, |attr| attr as u8),
                comp.format.map_or(u8::MAX, |format| format as u8),
                comp.slot_index,
                comp.step_function as u8,
                comp.step_rate,
            ];
            hash = fnv1a(hash, &fields);
        }
        hash
    }

    /// Ordered combination of two layout hashes
    ///
    /// Keys caches indexed by a (vertex layout, shader input layout) pair.
    /// The inputs are not interchangeable: swapping them produces a different
    /// value.
    pub fn combined_hash(l0: &VertexLayout, l1: &VertexLayout) -> u64 {
        let hash = fnv1a(FNV_OFFSET_BASIS, &l0.hash().to_le_bytes());
        fnv1a(hash, &l1.hash().to_le_bytes())
    }

    /// True when this layout provides every attribute of `inputs` with a
    /// matching format
    ///
    /// Used to validate a vertex-buffer layout against a shader's input
    /// layout at pipeline creation; each mismatch is logged at warn level.
    pub fn satisfies(&self, inputs: &VertexLayout) -> bool {
        let mut ok = true;
        for input in inputs.components() {
            let Some(attr) = input.attr else { continue };
            match self.component_index_by_attr(attr) {
                None => {
                    log::warn!("vertex layout is missing shader input attribute `{attr}`");
                    ok = false;
                }
                Some(index) => {
                    let provided = self.comps[index].format;
                    if provided != input.format {
                        log::warn!(
                            "vertex attribute `{attr}` format mismatch: buffer provides {:?}, shader expects {:?}",
                            provided,
                            input.format
                        );
                        ok = false;
                    }
                }
            }
        }
        ok
    }
}
