use crate::morpheme::split_morphemes;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GlossIndex {
    // gloss{part}- を順に連結したもの
    Annotation(String),
    // 形態素数が parts と gloss で異なる
    Mismatch,
    // parts か gloss のどちらかが空
    NoOp,
}

// 位置で対応させる
// "bələ-d-də-n", "помогать-PROG-PST-3SG" -> "помогать{bələ}-PROG{d}-PST{də}-3SG{n}-"
pub fn build_gloss_index(parts: Option<&str>, gloss: Option<&str>) -> GlossIndex {
    let morphemes = split_morphemes(parts);
    let glosses = split_morphemes(gloss);

    if morphemes.is_empty() || glosses.is_empty() {
        return GlossIndex::NoOp;
    }

    if morphemes.len() != glosses.len() {
        return GlossIndex::Mismatch;
    }

    let mut index = String::new();
    for (g, m) in glosses.iter().zip(morphemes.iter()) {
        index.push_str(g);
        index.push('{');
        index.push_str(m);
        index.push_str("}-");
    }

    GlossIndex::Annotation(index)
}
