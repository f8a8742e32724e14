//! Placed objects, in placement order
//!
//! The registry owns every placed object from the moment it is placed until a
//! remove-all. Clearing removes the scene nodes in the same call, so the
//! registry never points at a node the runtime no longer has.

use cgmath::Vector3;
use log::{debug, warn};

use crate::gfx::scene::{NodeId, RenderRuntime};

/// Identifier handed out per placement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(pub u64);

/// One die on a surface
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedObject {
    pub id: ObjectId,
    /// Scene node drawing the object; its orientation accumulates rolls
    pub node: NodeId,
    /// World position at placement time
    pub position: Vector3<f32>,
}

#[derive(Debug, Default)]
pub struct ObjectRegistry {
    objects: Vec<PlacedObject>,
}

impl ObjectRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an object at the end. Returns false, leaving the registry
    /// unchanged, if its id or node is already registered.
    pub fn append(&mut self, object: PlacedObject) -> bool {
        if self
            .objects
            .iter()
            .any(|o| o.id == object.id || o.node == object.node)
        {
            warn!("object {:?} already registered", object.id);
            return false;
        }
        self.objects.push(object);
        true
    }

    /// Visits every object in placement order
    pub fn for_each<F: FnMut(&PlacedObject)>(&self, f: F) {
        self.objects.iter().for_each(f);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PlacedObject> {
        self.objects.iter()
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Removes every object from the scene and from the registry.
    /// Returns how many objects were removed.
    pub fn clear<R: RenderRuntime + ?Sized>(&mut self, runtime: &mut R) -> usize {
        let count = self.objects.len();
        for object in self.objects.drain(..) {
            if !runtime.remove_node(object.node) {
                debug!("node of object {:?} was already gone", object.id);
            }
        }
        count
    }
}

impl<'a> IntoIterator for &'a ObjectRegistry {
    type Item = &'a PlacedObject;
    type IntoIter = std::slice::Iter<'a, PlacedObject>;

    fn into_iter(self) -> Self::IntoIter {
        self.objects.iter()
    }
}
