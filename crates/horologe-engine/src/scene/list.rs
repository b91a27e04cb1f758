use crate::coords::Transform;

use super::{Layer, MeshCmd, SceneSink, SortKey};

/// Stable handle to a mesh recorded in a [`MeshList`].
///
/// Handles stay valid for the life of the list; they are plain indices and carry no
/// borrow, so a builder can return them and an animator can use them later.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct MeshHandle(u32);

impl MeshHandle {
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// A single recorded mesh: sort key + descriptor.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshItem {
    pub key: SortKey,
    pub cmd: MeshCmd,
}

/// Retained mesh stream for a scene.
///
/// Unlike an immediate-mode draw list, items persist across frames: the static parts
/// are recorded once and movable parts are rewritten through their [`MeshHandle`].
///
/// Performance characteristics:
/// - `push()` is O(1)
/// - transform updates are O(1) and do not invalidate paint order
/// - paint-order iteration reuses an internal index buffer
#[derive(Debug, Default, Clone)]
pub struct MeshList {
    items: Vec<MeshItem>,
    next_order: u32,

    sorted_indices: Vec<usize>,
    sorted_dirty: bool,
}

impl MeshList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns items in insertion order.
    #[inline]
    pub fn items(&self) -> &[MeshItem] {
        &self.items
    }

    /// Records a mesh on `layer` and returns its handle.
    pub fn push(&mut self, layer: Layer, cmd: MeshCmd) -> MeshHandle {
        let handle = MeshHandle(self.items.len() as u32);
        let order = self.next_order;
        self.next_order = self.next_order.wrapping_add(1);

        self.items.push(MeshItem {
            key: SortKey::new(layer, order),
            cmd,
        });

        self.sorted_dirty = true;
        handle
    }

    #[inline]
    pub fn get(&self, handle: MeshHandle) -> Option<&MeshItem> {
        self.items.get(handle.index())
    }

    /// Overwrites the transform of a recorded mesh.
    ///
    /// Returns `false` if the handle does not belong to this list.
    #[inline]
    pub fn set_transform(&mut self, handle: MeshHandle, transform: Transform) -> bool {
        match self.items.get_mut(handle.index()) {
            Some(item) => {
                item.cmd.transform = transform;
                true
            }
            None => false,
        }
    }

    /// Iterates `(handle, item)` pairs in paint order without cloning descriptors.
    pub fn iter_in_paint_order(&mut self) -> impl Iterator<Item = (MeshHandle, &MeshItem)> {
        if self.sorted_dirty {
            self.rebuild_sorted_indices();
        }

        self.sorted_indices
            .iter()
            .map(|&i| (MeshHandle(i as u32), &self.items[i]))
    }

    /// Submits every item to `sink` in paint order.
    pub fn submit_to(&mut self, sink: &mut dyn SceneSink) {
        for (handle, item) in self.iter_in_paint_order() {
            sink.submit(handle, item);
        }
    }

    fn rebuild_sorted_indices(&mut self) {
        self.sorted_indices.clear();
        self.sorted_indices.extend(0..self.items.len());

        // SortKey includes insertion order, so the sort is total and stable.
        self.sorted_indices
            .sort_by(|&a, &b| self.items[a].key.cmp(&self.items[b].key));

        self.sorted_dirty = false;
    }
}
