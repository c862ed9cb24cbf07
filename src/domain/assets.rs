//! Static catalog of the piece images used by the UI.
//!
//! Values are passed through as-is; nothing here is interpreted by the menu or clock logic.

/// Attribution for the piece image set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageCredit {
    pub content: &'static str,
    pub lang: &'static str,
    pub user: &'static str,
    pub license: &'static str,
    pub version: &'static str,
}

pub const IMAGE_CREDIT: ImageCredit = ImageCredit {
    content: "Chess vector images",
    lang: "en",
    user: "User:Cburnett",
    license: "by-sa",
    version: "3.0",
};

/// Image file stems: piece letter, `d`ark or `l`ight, `t` for transparent background.
pub const PIECE_IMAGE_FILES: [&str; 12] = [
    "kdt", "klt", "qdt", "qlt", "rdt", "rlt", "bdt", "blt", "ndt", "nlt", "pdt", "plt",
];

/// Upstream file identifiers, parallel to [`PIECE_IMAGE_FILES`].
pub const PIECE_IMAGE_IDS: [u32; 12] = [
    1499803, 1499806, 1499811, 1499812, 1499813, 1499814, 1499800, 1499801, 1499807, 1499808,
    1499809, 1499810,
];

/// File stems paired with their identifiers, in catalog order.
pub fn piece_images() -> impl Iterator<Item = (&'static str, u32)> {
    PIECE_IMAGE_FILES.into_iter().zip(PIECE_IMAGE_IDS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_piece_images_pairs_in_order() {
        let pairs: Vec<_> = piece_images().collect();
        assert_eq!(pairs.len(), 12);
        assert_eq!(pairs[0], ("kdt", 1499803));
        assert_eq!(pairs[11], ("plt", 1499810));
    }
}
