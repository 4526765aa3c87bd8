/// Site routes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Catalog,
    Projects,
    Clients,
    Partners,
    Services,
    About,
    Contact,
    Legal,
    NotFound,
}

impl Route {
    pub const HOME: &'static str = "/";
    pub const CATALOG: &'static str = "/catalogo";
    pub const PROJECTS: &'static str = "/projects";
    pub const CLIENTS: &'static str = "/clients";
    pub const PARTNERS: &'static str = "/partners";
    pub const SERVICES: &'static str = "/services";
    pub const ABOUT: &'static str = "/about";
    pub const CONTACT: &'static str = "/contact";
    pub const LEGAL: &'static str = "/legal";

    /// Route for a pathname; a trailing slash is ignored.
    pub fn from_path(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');
        match if trimmed.is_empty() { "/" } else { trimmed } {
            Self::HOME => Route::Home,
            Self::CATALOG | "/catalog" => Route::Catalog,
            Self::PROJECTS | "/proyectos" => Route::Projects,
            Self::CLIENTS => Route::Clients,
            Self::PARTNERS => Route::Partners,
            Self::SERVICES => Route::Services,
            Self::ABOUT => Route::About,
            Self::CONTACT => Route::Contact,
            Self::LEGAL => Route::Legal,
            _ => Route::NotFound,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Route::Home | Route::NotFound => Self::HOME,
            Route::Catalog => Self::CATALOG,
            Route::Projects => Self::PROJECTS,
            Route::Clients => Self::CLIENTS,
            Route::Partners => Self::PARTNERS,
            Route::Services => Self::SERVICES,
            Route::About => Self::ABOUT,
            Route::Contact => Self::CONTACT,
            Route::Legal => Self::LEGAL,
        }
    }

    /// Document title for the route.
    pub fn title(&self) -> &'static str {
        match self {
            Route::Home => "O&P Ingeniería | Energía de respaldo e ingeniería eléctrica",
            Route::Catalog => "Catálogo | O&P Ingeniería",
            Route::Projects => "Proyectos | O&P Ingeniería",
            Route::Clients => "Clientes | O&P Ingeniería",
            Route::Partners => "Aliados | O&P Ingeniería",
            Route::Services => "Servicios | O&P Ingeniería",
            Route::About => "Nosotros | O&P Ingeniería",
            Route::Contact => "Contacto | O&P Ingeniería",
            Route::Legal => "Aviso legal | O&P Ingeniería",
            Route::NotFound => "Página no encontrada | O&P Ingeniería",
        }
    }
}

/// Anchored sections of the landing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeSection {
    Hero,
    About,
    Services,
    Products,
    Projects,
    Clients,
    Partners,
    Contact,
}

impl HomeSection {
    pub fn id(&self) -> &'static str {
        match self {
            HomeSection::Hero => "inicio",
            HomeSection::About => "nosotros",
            HomeSection::Services => "servicios",
            HomeSection::Products => "productos",
            HomeSection::Projects => "proyectos",
            HomeSection::Clients => "clientes",
            HomeSection::Partners => "partners",
            HomeSection::Contact => "contacto",
        }
    }

    pub fn href(&self) -> String {
        format!("{}#{}", Route::HOME, self.id())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavKind {
    Route,
    Section(HomeSection),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub to: String,
    pub kind: NavKind,
    pub submenu: Vec<(&'static str, String)>,
}

impl NavItem {
    fn route(label: &'static str, to: &str) -> Self {
        Self {
            label,
            to: to.to_string(),
            kind: NavKind::Route,
            submenu: Vec::new(),
        }
    }

    fn section(label: &'static str, section: HomeSection) -> Self {
        Self {
            label,
            to: Route::HOME.to_string(),
            kind: NavKind::Section(section),
            submenu: Vec::new(),
        }
    }

    pub fn href(&self) -> String {
        match &self.kind {
            NavKind::Section(section) => section.href(),
            NavKind::Route => self.to.clone(),
        }
    }

    /// Whether the item should be highlighted for the current location.
    pub fn is_active(&self, path: &str, hash: &str) -> bool {
        match &self.kind {
            NavKind::Route => Route::from_path(path) == Route::from_path(&self.to),
            NavKind::Section(section) => {
                Route::from_path(path) == Route::Home
                    && hash.trim_start_matches('#') == section.id()
            }
        }
    }
}

pub fn nav_items() -> Vec<NavItem> {
    let catalog_link = |cat: &str| format!("{}?cat={}", Route::CATALOG, cat);
    vec![
        NavItem::section("Inicio", HomeSection::Hero),
        NavItem::section("Nosotros", HomeSection::About),
        NavItem {
            submenu: vec![
                ("Grupos Electrógenos", catalog_link("grupos")),
                ("UPS y Estabilizadores", catalog_link("ups")),
                ("Energía Solar", catalog_link("solar")),
                ("Tableros Eléctricos", catalog_link("tableros")),
            ],
            ..NavItem::route("Productos", Route::CATALOG)
        },
        NavItem::section("Servicios", HomeSection::Services),
        NavItem::route("Proyectos", Route::PROJECTS),
        NavItem::section("Clientes", HomeSection::Clients),
        NavItem::route("Contacto", Route::CONTACT),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_from_path() {
        assert_eq!(Route::from_path("/"), Route::Home);
        assert_eq!(Route::from_path(""), Route::Home);
        assert_eq!(Route::from_path("/catalogo/"), Route::Catalog);
        assert_eq!(Route::from_path("/catalogo?cat=ups"), Route::Catalog);
        assert_eq!(Route::from_path("/contact#form"), Route::Contact);
        assert_eq!(Route::from_path("/wp-admin"), Route::NotFound);
        assert_eq!(Route::from_path(Route::Legal.path()), Route::Legal);
    }

    #[test]
    fn test_nav_hrefs() {
        let items = nav_items();
        assert_eq!(items[0].href(), "/#inicio");
        assert_eq!(items[2].href(), "/catalogo");
        assert_eq!(items[2].submenu[1].1, "/catalogo?cat=ups");
        assert!(items[1].is_active("/", "#nosotros"));
        assert!(!items[1].is_active("/projects", "#nosotros"));
        assert!(items[4].is_active("/projects/", ""));
    }
}
