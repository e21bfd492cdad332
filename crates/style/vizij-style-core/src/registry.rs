//! The four lookups the dispatcher consults, bundled and frozen at startup.
//!
//! Build one `StyleRegistry` per engine and hand out references; nothing
//! mutates it afterwards except the prefix resolver's memo.

use std::fmt;

use crate::config::{Config, EngineProfile};
use crate::element::ElementData;
use crate::error::ConfigError;
use crate::hooks::HookRegistry;
use crate::normalization::{NormalizationRegistry, TRANSFORM};
use crate::prefix::{StyleSupport, Unprefixed, VendorPrefixResolver};
use crate::svg::{DefaultSvgAttributes, SvgAttributes};

pub struct StyleRegistry {
    hooks: HookRegistry,
    normalizations: NormalizationRegistry,
    prefixes: VendorPrefixResolver,
    svg: Box<dyn SvgAttributes>,
}

impl fmt::Debug for StyleRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StyleRegistry")
            .field("hooks", &self.hooks)
            .field("normalizations", &self.normalizations)
            .field("prefixes", &self.prefixes)
            .finish_non_exhaustive()
    }
}

impl StyleRegistry {
    pub fn builder() -> StyleRegistryBuilder {
        StyleRegistryBuilder::default()
    }

    /// Standard hooks (plus `config.extra_hooks`) and normalizations for the
    /// configured engine, with `support` as the vendor-prefix probe.
    pub fn standard(config: &Config, support: impl StyleSupport + 'static) -> Result<Self, ConfigError> {
        let mut hooks = HookRegistry::standard();
        for template in &config.extra_hooks {
            hooks.register(template.clone())?;
        }
        Self::builder()
            .with_hooks(hooks)
            .with_normalizations(NormalizationRegistry::standard(&config.engine))
            .with_style_support(support)
            .build(&config.engine)
    }

    pub fn hooks(&self) -> &HookRegistry {
        &self.hooks
    }

    pub fn normalizations(&self) -> &NormalizationRegistry {
        &self.normalizations
    }

    pub fn prefixes(&self) -> &VendorPrefixResolver {
        &self.prefixes
    }

    pub fn svg_attributes(&self) -> &dyn SvgAttributes {
        self.svg.as_ref()
    }

    /// Reject names registered both as a hook and as a non-transform
    /// normalization that resolves somewhere other than the hook's root.
    /// Hooks always run first, so such a normalization could never apply.
    pub fn validate(&self, engine: &EngineProfile) -> Result<(), ConfigError> {
        for (name, hook) in self.hooks.iter() {
            let Some(norm) = self.normalizations.get(name) else {
                continue;
            };
            for data in [ElementData::html(), ElementData::svg()] {
                let concrete = norm.resolve_name(&data, engine);
                if concrete == TRANSFORM || concrete == hook.root {
                    continue;
                }
                return Err(ConfigError::HookNormalizationConflict {
                    property: name.to_string(),
                    hook_root: hook.root.clone(),
                    normalized: concrete.into_owned(),
                });
            }
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct StyleRegistryBuilder {
    hooks: HookRegistry,
    normalizations: NormalizationRegistry,
    prefixes: Option<VendorPrefixResolver>,
    svg: Option<Box<dyn SvgAttributes>>,
}

impl StyleRegistryBuilder {
    pub fn with_hooks(mut self, hooks: HookRegistry) -> Self {
        self.hooks = hooks;
        self
    }

    pub fn with_normalizations(mut self, normalizations: NormalizationRegistry) -> Self {
        self.normalizations = normalizations;
        self
    }

    pub fn with_style_support(mut self, support: impl StyleSupport + 'static) -> Self {
        self.prefixes = Some(VendorPrefixResolver::new(support));
        self
    }

    pub fn with_svg_attributes(mut self, svg: impl SvgAttributes + 'static) -> Self {
        self.svg = Some(Box::new(svg));
        self
    }

    /// Freeze the registry. Fails if [`StyleRegistry::validate`] does.
    pub fn build(self, engine: &EngineProfile) -> Result<StyleRegistry, ConfigError> {
        let registry = StyleRegistry {
            hooks: self.hooks,
            normalizations: self.normalizations,
            prefixes: self
                .prefixes
                .unwrap_or_else(|| VendorPrefixResolver::new(Unprefixed)),
            svg: self
                .svg
                .unwrap_or_else(|| Box::new(DefaultSvgAttributes::for_engine(engine))),
        };
        registry.validate(engine)?;
        Ok(registry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hooks::HookTemplate;
    use crate::normalization::effects::Clip;
    use crate::normalization::transform::{TransformComponent, TransformKind};

    #[test]
    fn standard_registry_is_consistent() {
        let cfg = Config::default();
        assert!(StyleRegistry::standard(&cfg, Unprefixed).is_ok());
        let legacy = Config::default().with_engine(EngineProfile::legacy());
        assert!(StyleRegistry::standard(&legacy, Unprefixed).is_ok());
    }

    #[test]
    fn conflicting_hook_and_normalization_is_rejected() {
        let mut hooks = HookRegistry::new();
        hooks
            .register(HookTemplate::new("outline", "Shape", "none"))
            .unwrap();
        let mut norms = NormalizationRegistry::new();
        norms.register("outlineShape", Clip);
        let err = StyleRegistry::builder()
            .with_hooks(hooks)
            .with_normalizations(norms)
            .build(&EngineProfile::modern())
            .unwrap_err();
        match err {
            ConfigError::HookNormalizationConflict {
                property,
                hook_root,
                normalized,
            } => {
                assert_eq!(property, "outlineShape");
                assert_eq!(hook_root, "outline");
                assert_eq!(normalized, "clip");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn transform_normalization_on_hook_name_is_allowed() {
        let mut hooks = HookRegistry::new();
        hooks
            .register(HookTemplate::new("spin", "Z", "0deg"))
            .unwrap();
        let mut norms = NormalizationRegistry::new();
        norms.register("spinZ", TransformComponent::new("spinZ", TransformKind::Rotate));
        assert!(StyleRegistry::builder()
            .with_hooks(hooks)
            .with_normalizations(norms)
            .build(&EngineProfile::modern())
            .is_ok());
    }

    #[test]
    fn extra_hooks_from_config() {
        let cfg = Config::from_json(
            r#"{ "extra_hooks": [ { "root": "borderRadius", "parts": ["TopLeft", "TopRight"], "default_value": "0px 0px" } ] }"#,
        )
        .unwrap();
        let reg = StyleRegistry::standard(&cfg, Unprefixed).unwrap();
        assert_eq!(reg.hooks().root_of("borderRadiusTopRight"), Some("borderRadius"));
        assert!(reg.hooks().has("textShadowBlur"));
    }
}
