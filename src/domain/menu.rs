//! The settings menu shipped with the chess UI.
//!
//! Built once on first use and shared as a `&'static Node` afterwards.

use once_cell::sync::OnceCell;

use crate::domain::builder::BranchBuilder;
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::node::Node;

pub const BOARD_THEME: &str = "Board theme";
pub const PAWN_PROMOTION: &str = "Pawn Promotion";
pub const OPPONENT: &str = "Opponent";
pub const TIME_CONTROL: &str = "Time control";

static MENU: OnceCell<Node> = OnceCell::new();

/// Top-level menu categories, in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuCategory {
    BoardTheme,
    PawnPromotion,
    Opponent,
    TimeControl,
}

impl MenuCategory {
    pub const ALL: [MenuCategory; 4] = [
        MenuCategory::BoardTheme,
        MenuCategory::PawnPromotion,
        MenuCategory::Opponent,
        MenuCategory::TimeControl,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MenuCategory::BoardTheme => BOARD_THEME,
            MenuCategory::PawnPromotion => PAWN_PROMOTION,
            MenuCategory::Opponent => OPPONENT,
            MenuCategory::TimeControl => TIME_CONTROL,
        }
    }

    /// Selector of this category at the menu root.
    pub fn index(&self) -> DomainResult<usize> {
        category_index(self.label())
    }
}

/// The shipped menu.
pub fn menu() -> DomainResult<&'static Node> {
    MENU.get_or_try_init(build_menu)
}

/// Selector of the "Pawn Promotion" category at the menu root.
pub fn pawn_promotion_index() -> DomainResult<usize> {
    MenuCategory::PawnPromotion.index()
}

fn category_index(label: &str) -> DomainResult<usize> {
    menu()?
        .as_branch()
        .and_then(|root| root.position(label))
        .ok_or_else(|| DomainError::LabelNotFound(label.to_string()))
}

fn build_menu() -> DomainResult<Node> {
    BranchBuilder::new()
        .branch(
            BOARD_THEME,
            BranchBuilder::new()
                .leaf("Woodgrain", "woodgrain")
                .leaf("Green-and-buff", "greenbuff"),
        )
        .branch(
            PAWN_PROMOTION,
            BranchBuilder::new()
                .leaf("Queen", "q")
                .leaf("Rook", "r")
                .leaf("Bishop", "b")
                .leaf("Knight", "n"),
        )
        .branch(
            OPPONENT,
            BranchBuilder::new()
                .leaf("Vs self", -1i64)
                .leaf("Vs CPU black", 1i64)
                .leaf("Vs CPU white", 0i64),
        )
        .branch(TIME_CONTROL, time_control_menu())
        .build()
}

fn time_control_menu() -> BranchBuilder {
    BranchBuilder::new()
        .leaf("untimed", "-")
        .leaf("G/30", "1800")
        .leaf("G/60", "3600")
        .leaf("G/90+30", "5400+30")
        .leaf("40/90+30, SD/30+30", "40/5400+30:1800+30")
        .leaf("40/100+30, 20/50+30, SD/15+30", "40/6000+30:20/3000+30:900+30")
        .branch(
            "40/120, ...",
            BranchBuilder::new()
                .leaf("SD/30", "40/7200:1800")
                .leaf("SD/60", "40/7200:3600")
                .leaf("20/60, SD/30", "40/7200:20/3600:1800")
                .leaf("20/60, SD/15+30", "40/7200:20/3600:900+30"),
        )
        .branch(
            "Rapid",
            BranchBuilder::new()
                .leaf("G/15+10", "900+10")
                .leaf("G/15+5", "900+5")
                .leaf("G/25+10", "1500+10")
                .leaf("G/25", "1500"),
        )
        .branch(
            "Blitz",
            BranchBuilder::new()
                .leaf("G/3+2", "180+2")
                .leaf("G/5", "300")
                .leaf("G/5+3", "300+3"),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_is_built_once() {
        let a = menu().unwrap();
        let b = menu().unwrap();
        assert!(std::ptr::eq(a, b));
    }

    #[test]
    fn test_category_indices_follow_menu_order() {
        for (i, category) in MenuCategory::ALL.iter().enumerate() {
            assert_eq!(category.index().unwrap(), i);
        }
        assert_eq!(pawn_promotion_index().unwrap(), 1);
    }
}
