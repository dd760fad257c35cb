use action_items_core::{EffectSink, Particle, ParticleId, SinkError};
use fnv::FnvHashMap;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Appends particles to `document.body` and removes exactly the element it
/// created for each id.
pub struct DomSink {
    document: web::Document,
    live: FnvHashMap<ParticleId, web::Element>,
}

impl DomSink {
    pub fn new(document: web::Document) -> Self {
        Self {
            document,
            live: FnvHashMap::default(),
        }
    }

    fn build(&self, particle: &Particle) -> Result<web::HtmlElement, String> {
        let kind = particle.kind();
        let el = self
            .document
            .create_element(kind.tag_name())
            .map_err(|e| format!("{:?}", e))?
            .dyn_into::<web::HtmlElement>()
            .map_err(|e| format!("{:?}", e))?;
        el.set_class_name(kind.class_name());
        let style = el.style();
        _ = style.set_property("left", &particle.left_px());
        _ = style.set_property("top", &particle.top_px());
        for (name, value) in particle.style_vars() {
            _ = style.set_property(name, &value);
        }
        Ok(el)
    }
}

impl EffectSink for DomSink {
    fn append(&mut self, particle: &Particle) -> Result<(), SinkError> {
        let body = self
            .document
            .body()
            .ok_or_else(|| SinkError::Append(particle.id, "no body".into()))?;
        let el = self
            .build(particle)
            .map_err(|e| SinkError::Append(particle.id, e))?;
        body.append_child(&el)
            .map_err(|e| SinkError::Append(particle.id, format!("{:?}", e)))?;
        self.live.insert(particle.id, el.into());
        Ok(())
    }

    fn remove(&mut self, id: ParticleId) -> Result<(), SinkError> {
        let el = self.live.remove(&id).ok_or(SinkError::Unknown(id))?;
        el.remove();
        Ok(())
    }
}
