//! Image sources: public asset paths and the load/fallback lifecycle of one `<img>`.

/// Rewrites legacy filesystem paths (`./src/assets/images/uploads/...`) to paths
/// relative to the public root (`uploads/...`). Absolute URLs and data URIs pass
/// through untouched.
pub fn normalize_public_path(input: &str) -> String {
    if input.is_empty() || is_external(input) {
        return input.to_string();
    }

    let mut path = input.trim().trim_matches(|c| c == '\'' || c == '"');
    path = path.strip_prefix("./").unwrap_or(path);
    path = path.strip_prefix("src/assets/images/").unwrap_or(path);
    path = path.strip_prefix("src/assets/").unwrap_or(path);
    path = path.trim_start_matches('/');

    match path.strip_prefix("images/uploads/") {
        Some(rest) => format!("uploads/{rest}"),
        None => path.to_string(),
    }
}

/// Resolves an asset against the deployment base path (`/` or e.g. `/op-ingenieria/`).
pub fn public_asset(input: &str, base: &str) -> String {
    if input.trim().is_empty() {
        return String::new();
    }
    if is_external(input) {
        return input.to_string();
    }

    let clean = normalize_public_path(input);
    let base_dir = base.trim_matches('/');
    let relative = if base_dir.is_empty() {
        clean.as_str()
    } else {
        clean
            .strip_prefix(base_dir)
            .filter(|rest| rest.starts_with('/'))
            .unwrap_or(&clean)
    };

    collapse_slashes(&format!("/{base_dir}/{relative}"))
}

pub fn public_assets<'a>(list: impl IntoIterator<Item = &'a str>, base: &str) -> Vec<String> {
    list.into_iter()
        .map(|src| public_asset(src, base))
        .filter(|src| !src.is_empty())
        .collect()
}

fn is_external(input: &str) -> bool {
    let lower = input.trim_start().get(..8).unwrap_or(input).to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://") || lower.starts_with("data:")
}

fn collapse_slashes(path: &str) -> String {
    let mut out = String::with_capacity(path.len());
    for ch in path.chars() {
        if ch == '/' && out.ends_with('/') {
            continue;
        }
        out.push(ch);
    }
    out
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageLoadState {
    #[default]
    Loading,
    Loaded,
    /// Primary failed, fallback is being shown.
    Fallback,
    Failed,
}

/// One displayed image with an optional fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSource {
    primary: String,
    fallback: Option<String>,
    state: ImageLoadState,
}

impl ImageSource {
    pub fn new(primary: impl Into<String>, fallback: Option<String>) -> Self {
        let primary = primary.into();
        let mut source = Self {
            primary,
            fallback: fallback.filter(|f| !f.trim().is_empty()),
            state: ImageLoadState::Loading,
        };
        if source.primary.trim().is_empty() {
            source.state = match source.fallback {
                Some(_) => ImageLoadState::Fallback,
                None => ImageLoadState::Failed,
            };
        }
        source
    }

    pub fn state(&self) -> ImageLoadState {
        self.state
    }

    pub fn current_src(&self) -> Option<&str> {
        match self.state {
            ImageLoadState::Loading | ImageLoadState::Loaded => Some(self.primary.as_str()),
            ImageLoadState::Fallback => self.fallback.as_deref(),
            ImageLoadState::Failed => None,
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.state == ImageLoadState::Loaded
    }

    pub fn on_load(&mut self) {
        if self.state == ImageLoadState::Loading {
            self.state = ImageLoadState::Loaded;
        }
    }

    /// The fallback is tried once; a failing fallback ends in `Failed`.
    pub fn on_error(&mut self) {
        self.state = match (self.state, &self.fallback) {
            (ImageLoadState::Loading | ImageLoadState::Loaded, Some(fallback))
                if *fallback != self.primary =>
            {
                ImageLoadState::Fallback
            }
            _ => ImageLoadState::Failed,
        };
    }

    pub fn reset(&mut self, primary: impl Into<String>) {
        *self = Self::new(primary, self.fallback.take());
    }
}

/// Active slide of an image gallery. Autoplay runs until the user navigates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GalleryCursor {
    len: usize,
    active: usize,
    autoplay: bool,
}

impl GalleryCursor {
    pub const AUTOPLAY_MS: u32 = 6000;

    pub fn new(len: usize) -> Self {
        Self {
            len,
            active: 0,
            autoplay: len > 1,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn is_autoplaying(&self) -> bool {
        self.autoplay
    }

    pub fn next(&mut self) {
        self.autoplay = false;
        self.advance();
    }

    pub fn prev(&mut self) {
        self.autoplay = false;
        if self.len > 1 {
            self.active = if self.active == 0 { self.len - 1 } else { self.active - 1 };
        }
    }

    pub fn select(&mut self, index: usize) {
        self.autoplay = false;
        if index < self.len {
            self.active = index;
        }
    }

    /// Autoplay step; `false` once the user took over.
    pub fn tick(&mut self) -> bool {
        if !self.autoplay {
            return false;
        }
        self.advance();
        true
    }

    /// `"2 / 5"`, only for galleries with more than one image.
    pub fn position_label(&self) -> Option<String> {
        (self.len > 1).then(|| format!("{} / {}", self.active + 1, self.len))
    }

    fn advance(&mut self) {
        if self.len > 1 {
            self.active = (self.active + 1) % self.len;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_legacy_paths() {
        assert_eq!(
            normalize_public_path("./src/assets/images/uploads/2019/11/002B.jpg"),
            "uploads/2019/11/002B.jpg"
        );
        assert_eq!(normalize_public_path("src/assets/logos/abb.png"), "logos/abb.png");
        assert_eq!(normalize_public_path("/images/uploads/a.jpg"), "uploads/a.jpg");
        assert_eq!(normalize_public_path("'uploads/b.png'"), "uploads/b.png");
        assert_eq!(normalize_public_path("https://cdn.example.com/x.png"), "https://cdn.example.com/x.png");
        assert_eq!(normalize_public_path(""), "");
    }

    #[test]
    fn test_public_asset_respects_base() {
        assert_eq!(public_asset("uploads/a.jpg", "/"), "/uploads/a.jpg");
        assert_eq!(public_asset("./src/assets/images/uploads/a.jpg", "/op-ingenieria/"), "/op-ingenieria/uploads/a.jpg");
        assert_eq!(public_asset("/op-ingenieria/uploads/a.jpg", "/op-ingenieria/"), "/op-ingenieria/uploads/a.jpg");
        assert_eq!(public_asset("DATA:image/png;base64,AAAA", "/x/"), "DATA:image/png;base64,AAAA");
        assert_eq!(public_asset("  ", "/"), "");
        assert_eq!(public_assets(["a.png", "", "b.png"], "/"), vec!["/a.png", "/b.png"]);
    }

    #[test]
    fn test_image_falls_back_once() {
        let mut image = ImageSource::new("/uploads/a.jpg", Some("/placeholder.svg".into()));
        assert_eq!(image.current_src(), Some("/uploads/a.jpg"));
        image.on_error();
        assert_eq!(image.state(), ImageLoadState::Fallback);
        assert_eq!(image.current_src(), Some("/placeholder.svg"));
        image.on_load();
        assert_eq!(image.state(), ImageLoadState::Fallback);
        image.on_error();
        assert_eq!(image.state(), ImageLoadState::Failed);
        assert_eq!(image.current_src(), None);

        image.reset("/uploads/b.jpg");
        assert_eq!(image.state(), ImageLoadState::Loading);
        image.on_load();
        assert!(image.is_loaded());
    }

    #[test]
    fn test_image_without_fallback() {
        let mut image = ImageSource::new("/a.jpg", None);
        image.on_error();
        assert_eq!(image.state(), ImageLoadState::Failed);

        let empty = ImageSource::new("", Some("/placeholder.svg".into()));
        assert_eq!(empty.current_src(), Some("/placeholder.svg"));
    }

    #[test]
    fn test_gallery_autoplay_stops_on_user_navigation() {
        let mut gallery = GalleryCursor::new(3);
        assert_eq!(gallery.position_label().as_deref(), Some("1 / 3"));
        assert!(gallery.tick());
        assert!(gallery.tick());
        assert!(gallery.tick());
        assert_eq!(gallery.active(), 0);

        gallery.prev();
        assert_eq!(gallery.active(), 2);
        assert!(!gallery.is_autoplaying());
        assert!(!gallery.tick());
        assert_eq!(gallery.active(), 2);

        gallery.select(7);
        assert_eq!(gallery.active(), 2);
        gallery.next();
        assert_eq!(gallery.active(), 0);
    }

    #[test]
    fn test_single_image_gallery_is_static() {
        let mut gallery = GalleryCursor::new(1);
        assert!(!gallery.is_autoplaying());
        gallery.next();
        assert_eq!(gallery.active(), 0);
        assert_eq!(gallery.position_label(), None);
    }
}
