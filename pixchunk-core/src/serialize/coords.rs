use crate::domain::ChunkCoord;

/// Coordinates of one group, in map order. Both the comment header and the
/// generated Lua table are rendered from this, never from each other.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CoordList(Vec<ChunkCoord>);

impl CoordList {
    pub fn new(coords: Vec<ChunkCoord>) -> Self {
        Self(coords)
    }

    pub fn as_slice(&self) -> &[ChunkCoord] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// `(0, 0), (1, 0)`
    pub fn header(&self) -> String {
        self.0
            .iter()
            .map(|c| format!("({}, {})", c.column, c.row))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// `"0,0","1,0"`; the keys the in-game code addresses displays by.
    pub fn lua_keys(&self) -> String {
        self.0
            .iter()
            .map(|c| format!("\"{},{}\"", c.column, c.row))
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl FromIterator<ChunkCoord> for CoordList {
    fn from_iter<I: IntoIterator<Item = ChunkCoord>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CoordList {
        [(0, 0), (1, 0), (12, 3)]
            .into_iter()
            .map(|(c, r)| ChunkCoord::new(c, r))
            .collect()
    }

    #[test]
    fn header_has_no_outer_brackets() {
        assert_eq!(sample().header(), "(0, 0), (1, 0), (12, 3)");
    }

    #[test]
    fn lua_keys_match_quoted_header() {
        let list = sample();
        let substituted = list
            .header()
            .replace(['(', ')'], "\"")
            .replace(' ', "");
        assert_eq!(list.lua_keys(), substituted);
        assert_eq!(list.lua_keys(), r#""0,0","1,0","12,3""#);
    }

    #[test]
    fn single_coordinate() {
        let list: CoordList = std::iter::once(ChunkCoord::new(4, 9)).collect();
        assert_eq!(list.header(), "(4, 9)");
        assert_eq!(list.lua_keys(), "\"4,9\"");
    }
}
