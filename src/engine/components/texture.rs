/// A texture already resident on the GPU.
///
/// `name` is the sampler uniform the texture is bound to when a mesh is
/// rendered. `path` is only used to recognise a texture that was loaded
/// before; it is never reloaded from. Textures are shared between meshes and
/// are not released by them.
///
/// There is no `PartialEq`: two textures count as the same exactly when
/// [`same_source`](Texture::same_source) says so.
#[derive(Debug, Clone)]
pub struct Texture<H = glow::Texture> {
    pub id: H,
    pub name: String,
    pub path: String,
}

impl<H> Texture<H> {
    pub fn new(id: H, name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            path: path.into(),
        }
    }

    pub fn same_source(&self, other: &Texture<H>) -> bool {
        self.path == other.path
    }
}

/// Textures keyed by source path, at most one per path. Used by loaders to
/// avoid uploading the same image twice.
#[derive(Debug, Clone)]
pub struct TextureSet<H = glow::Texture> {
    textures: Vec<Texture<H>>,
}

impl<H> Default for TextureSet<H> {
    fn default() -> Self {
        Self { textures: Vec::new() }
    }
}

impl<H: Clone> TextureSet<H> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn find_by_path(&self, path: &str) -> Option<&Texture<H>> {
        self.textures.iter().find(|t| t.path == path)
    }

    /// Adds `texture` unless one with the same path is present. Returns the
    /// stored texture and whether it was newly inserted.
    pub fn insert(&mut self, texture: Texture<H>) -> (&Texture<H>, bool) {
        if let Some(pos) = self.textures.iter().position(|t| t.same_source(&texture)) {
            log::debug!("Texture {:?} already loaded, reusing", texture.path);
            return (&self.textures[pos], false);
        }
        self.textures.push(texture);
        let last = self.textures.len() - 1;
        (&self.textures[last], true)
    }

    /// Returns the texture for `path`, creating it with `load` on first use.
    pub fn get_or_insert_with<E>(
        &mut self,
        path: &str,
        load: impl FnOnce() -> Result<Texture<H>, E>
    ) -> Result<Texture<H>, E> {
        if let Some(existing) = self.find_by_path(path) {
            return Ok(existing.clone());
        }
        let texture = load()?;
        let (stored, _) = self.insert(texture);
        Ok(stored.clone())
    }

    pub fn len(&self) -> usize {
        self.textures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Texture<H>> {
        self.textures.iter()
    }

    pub fn into_vec(self) -> Vec<Texture<H>> {
        self.textures
    }
}
