pub mod coords;
pub mod groups;

pub use coords::CoordList;
pub use groups::{
    Brackets, ChunkGroups, GroupSize, MAX_GROUP_SIZE, SerializedChunk, serialize_groups,
};
