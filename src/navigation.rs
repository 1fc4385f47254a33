use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Route {
    Home,
    Journey,
    Product,
    About,
    Contact,
}

impl Route {
    /// Header order.
    pub const ALL: [Route; 5] = [
        Route::Home,
        Route::Journey,
        Route::Product,
        Route::About,
        Route::Contact,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Journey => "/butterfly-journey",
            Route::Product => "/products/butterfly",
            Route::About => "/about",
            Route::Contact => "/contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Journey => "Butterfly Journey",
            Route::Product => "Products",
            Route::About => "About",
            Route::Contact => "Contact",
        }
    }

    /// Where the rendered page lands relative to the output directory.
    pub fn output_file(self) -> String {
        match self {
            Route::Home => "index.html".to_string(),
            other => format!("{}/index.html", other.path().trim_start_matches('/')),
        }
    }

    pub fn from_path(path: &str) -> Option<Route> {
        let trimmed = path.trim_end_matches('/');
        let normalized = if trimmed.is_empty() { "/" } else { trimmed };
        Route::ALL.into_iter().find(|route| route.path() == normalized)
    }
}

/// Mobile navigation overlay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Picking a link navigates and closes the overlay.
    pub fn select(&mut self, route: Route) -> &'static str {
        self.close();
        route.path()
    }
}
