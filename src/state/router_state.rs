//! RouterState - Active Page and History

use crate::app::navigation::Route;

/// State for page navigation
#[derive(Debug, Default)]
pub struct RouterState {
    /// Currently active route
    active: Route,
    /// Routes visited before the active one
    history: Vec<Route>,
}

impl RouterState {
    pub fn new(initial: Route) -> Self {
        Self {
            active: initial,
            history: Vec::new(),
        }
    }

    pub fn active(&self) -> Route {
        self.active
    }

    /// Switch to `route` (from a nav click). Returns false when already there.
    pub fn navigate(&mut self, route: Route) -> bool {
        if route == self.active {
            return false;
        }
        self.history.push(self.active);
        self.active = route;
        true
    }

    /// Return to the previous route, if any
    pub fn back(&mut self) -> Option<Route> {
        let previous = self.history.pop()?;
        self.active = previous;
        Some(previous)
    }

    pub fn can_go_back(&self) -> bool {
        !self.history.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigate_and_back() {
        let mut router = RouterState::default();
        assert_eq!(router.active(), Route::Home);
        assert!(!router.navigate(Route::Home));

        assert!(router.navigate(Route::Projects));
        assert!(router.navigate(Route::Contact));
        assert_eq!(router.back(), Some(Route::Projects));
        assert_eq!(router.back(), Some(Route::Home));
        assert_eq!(router.back(), None);
        assert!(!router.can_go_back());
    }
}
