use super::*;

impl EguiController {
    /// Switch pages. Each page keeps its own form, result and error.
    pub fn navigate(&mut self, route: Route) {
        if self.ui.route == route {
            return;
        }
        tracing::debug!("Navigating to {}", route.path());
        self.ui.route = route;
    }

    pub fn current_route(&self) -> Route {
        self.ui.route
    }
}
