use std::collections::HashMap;
use crate::core::library::LibraryResult;

// Repository keeps entities in insertion order; positions are zero-based.
pub trait Repository<Entity>: Sync + Send {
    // append an entity and return its position
    fn create(&mut self, entity: &Entity) -> LibraryResult<usize>;

    // replace the entity at a position
    fn update(&mut self, index: usize, entity: &Entity) -> LibraryResult<usize>;

    // get the first entity with the id
    fn get(&self, id: &str) -> LibraryResult<Entity>;

    // get the entity at a position
    fn get_at(&self, index: usize) -> LibraryResult<Entity>;

    // delete the first entity with the id and return it
    fn delete(&mut self, id: &str) -> LibraryResult<Entity>;

    // find by field predicate, an empty predicate matches everything
    fn query(&self, predicate: &HashMap<String, String>) -> LibraryResult<Vec<Entity>>;

    fn count(&self) -> usize;
}
