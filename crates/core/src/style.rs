//! Style enhancement map: technical and mood phrases per visual style.

use crate::types::VisualStyle;

/// Technical and mood phrase pair for one visual style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleEnhancement {
    pub technical: &'static str,
    pub mood: &'static str,
}

/// Look up the enhancement pair for a visual style.
pub fn style_enhancement(style: VisualStyle) -> StyleEnhancement {
    match style {
        VisualStyle::Realistic => StyleEnhancement {
            technical: "photorealistic rendering, natural textures, accurate proportions",
            mood: "authentic and grounded atmosphere",
        },
        VisualStyle::Cinematic => StyleEnhancement {
            technical: "cinematic color grading, anamorphic lens, subtle film grain",
            mood: "epic and emotionally charged atmosphere",
        },
        VisualStyle::Artistic => StyleEnhancement {
            technical: "painterly brushwork, stylized rendering, expressive color palette",
            mood: "imaginative and evocative atmosphere",
        },
        VisualStyle::Professional => StyleEnhancement {
            technical: "clean commercial photography, crisp details, polished finish",
            mood: "confident and trustworthy atmosphere",
        },
    }
}
