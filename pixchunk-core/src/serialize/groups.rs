use super::coords::CoordList;
use crate::domain::{ChunkCoord, ChunkMap, ChunkMatrix};
use crate::error::{PixchunkError, Result};
use serde::{Deserialize, Serialize};
use std::iter::Enumerate;
use std::slice::Chunks;

pub const MAX_GROUP_SIZE: usize = 10;

/// Chunks per serialized group, known to be within 1..=10.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GroupSize(usize);

impl GroupSize {
    pub fn new(n: usize) -> Result<Self> {
        if !(1..=MAX_GROUP_SIZE).contains(&n) {
            return Err(PixchunkError::InvalidGroupSize(n));
        }
        Ok(Self(n))
    }

    pub fn get(&self) -> usize {
        self.0
    }
}

/// Characters written in place of list brackets in the data block.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brackets {
    pub open: char,
    pub close: char,
}

impl Default for Brackets {
    fn default() -> Self {
        Self {
            open: '{',
            close: '}',
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SerializedChunk {
    pub coords: CoordList,
    pub header: String,
    pub data: String,
}

impl SerializedChunk {
    fn from_group(group: &[(ChunkCoord, ChunkMatrix)], brackets: Brackets) -> Self {
        let coords: CoordList = group.iter().map(|(c, _)| *c).collect();
        let header = coords.header();
        let data = render_data(group.iter().map(|(_, m)| m), brackets);
        Self {
            coords,
            header,
            data,
        }
    }
}

fn push_list<T>(
    out: &mut String,
    items: impl IntoIterator<Item = T>,
    brackets: Brackets,
    mut item: impl FnMut(&mut String, T),
) {
    out.push(brackets.open);
    for (i, it) in items.into_iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        item(out, it);
    }
    out.push(brackets.close);
}

/// Group -> matrices -> rows -> quoted colors, every level delimited by
/// `brackets` and separated by `", "`.
fn render_data<'a>(matrices: impl Iterator<Item = &'a ChunkMatrix>, brackets: Brackets) -> String {
    let mut out = String::new();
    push_list(&mut out, matrices, brackets, |out, matrix| {
        push_list(out, matrix, brackets, |out, row| {
            push_list(out, row, brackets, |out, color| {
                out.push('\'');
                out.push_str(color);
                out.push('\'');
            });
        });
    });
    out
}

/// Serialized groups of one image with their 0-based sequence index.
/// Single pass: once drained it yields nothing more.
pub struct ChunkGroups<'a> {
    inner: Enumerate<Chunks<'a, (ChunkCoord, ChunkMatrix)>>,
    brackets: Brackets,
}

impl Iterator for ChunkGroups<'_> {
    type Item = (SerializedChunk, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let (index, group) = self.inner.next()?;
        Some((SerializedChunk::from_group(group, self.brackets), index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for ChunkGroups<'_> {}

/// Split `map` into runs of `group_size` chunks (the last may be shorter).
pub fn serialize_groups(
    map: &ChunkMap,
    group_size: GroupSize,
    brackets: Brackets,
) -> ChunkGroups<'_> {
    ChunkGroups {
        inner: map.entries().chunks(group_size.get()).enumerate(),
        brackets,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ChunkSize, ImageDescriptor};
    use crate::extract::extract_chunks;
    use image::{Rgb, RgbImage};
    use std::path::PathBuf;

    fn map_of(chx: u32, chy: u32, size: ChunkSize) -> ChunkMap {
        let img = RgbImage::from_fn(chx * size.width(), chy * size.height(), |x, y| {
            Rgb([x as u8, y as u8, 0xff])
        });
        let desc = ImageDescriptor {
            path: PathBuf::from("m.png"),
            chx,
            chy,
        };
        extract_chunks(&desc, &img, size).unwrap()
    }

    #[test]
    fn group_counts_and_indices() {
        let map = map_of(7, 1, ChunkSize::new(1, 1).unwrap());
        for g in 1..=MAX_GROUP_SIZE {
            let size = GroupSize::new(g).unwrap();
            let groups: Vec<_> = serialize_groups(&map, size, Brackets::default()).collect();
            assert_eq!(groups.len(), 7usize.div_ceil(g));
            for (i, (chunk, index)) in groups.iter().enumerate() {
                assert_eq!(*index, i);
                let expect = if i + 1 < groups.len() { g } else { 7 - g * i };
                assert_eq!(chunk.coords.len(), expect);
            }
        }
    }

    #[test]
    fn group_size_out_of_range() {
        for g in [0, 11] {
            assert!(matches!(
                GroupSize::new(g),
                Err(PixchunkError::InvalidGroupSize(n)) if n == g
            ));
        }
        assert_eq!(GroupSize::new(MAX_GROUP_SIZE).unwrap().get(), 10);
    }

    #[test]
    fn data_uses_brackets_at_every_level() {
        let map = map_of(3, 1, ChunkSize::new(2, 1).unwrap());
        let mut groups = serialize_groups(&map, GroupSize::new(2).unwrap(), Brackets::default());
        let (first, _) = groups.next().unwrap();
        assert_eq!(first.header, "(0, 0), (1, 0)");
        assert_eq!(
            first.data,
            "{{{'#0000ff', '#0100ff'}}, {{'#0200ff', '#0300ff'}}}"
        );
        let (last, index) = groups.next().unwrap();
        assert_eq!(index, 1);
        assert_eq!(last.header, "(2, 0)");
        assert_eq!(last.data, "{{{'#0400ff', '#0500ff'}}}");
        assert!(groups.next().is_none());
    }

    #[test]
    fn multi_row_matrix_and_custom_brackets() {
        let map = map_of(1, 1, ChunkSize::new(1, 2).unwrap());
        let brackets = Brackets {
            open: '[',
            close: ']',
        };
        let (chunk, _) = serialize_groups(&map, GroupSize::new(1).unwrap(), brackets)
            .next()
            .unwrap();
        assert_eq!(chunk.data, "[[['#0000ff'], ['#0001ff']]]");
    }
}
