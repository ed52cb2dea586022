use selkup_gloss_index::{
    gloss_index::{build_gloss_index, GlossIndex},
    morpheme::split_morphemes,
};

#[test]
fn test_split_morphemes() {
    assert_eq!(split_morphemes(Some("bələ-d-də-n")), vec!["bələ", "d", "də", "n"]);
    assert_eq!(split_morphemes(Some("qorqɨ=naj")), vec!["qorqɨ", "naj"]);
    assert_eq!(split_morphemes(Some("nɨːnɨ")), vec!["nɨːnɨ"]);
}

#[test]
fn test_split_morphemes_delimiter_runs() {
    assert_eq!(split_morphemes(Some("-a--b=-=c-")), vec!["a", "b", "c"]);
    assert_eq!(split_morphemes(Some("==a")), vec!["a"]);
    assert!(split_morphemes(Some("-=-")).is_empty());
}

#[test]
fn test_split_morphemes_empty() {
    assert!(split_morphemes(Some("")).is_empty());
    assert!(split_morphemes(None).is_empty());
}

#[test]
fn test_split_morphemes_keeps_other_punctuation() {
    // "." は区切りではない
    assert_eq!(
        split_morphemes(Some("уйти-CO-3SG.S")),
        vec!["уйти", "CO", "3SG.S"]
    );
    assert_eq!(split_morphemes(Some("a b-c")), vec!["a b", "c"]);
}

#[test]
fn test_build_gloss_index() {
    assert_eq!(
        build_gloss_index(Some("bələ-d-də-n"), Some("помогать-PROG-PST-3SG")),
        GlossIndex::Annotation("помогать{bələ}-PROG{d}-PST{də}-3SG{n}-".to_owned())
    );
    assert_eq!(
        build_gloss_index(Some("a-b"), Some("X-Y")),
        GlossIndex::Annotation("X{a}-Y{b}-".to_owned())
    );
    assert_eq!(
        build_gloss_index(Some("qorqɨ=naj"), Some("медведь=EMPH2")),
        GlossIndex::Annotation("медведь{qorqɨ}-EMPH2{naj}-".to_owned())
    );
}

#[test]
fn test_build_gloss_index_single_segment() {
    assert_eq!(
        build_gloss_index(Some("nɨːnɨ"), Some("потом")),
        GlossIndex::Annotation("потом{nɨːnɨ}-".to_owned())
    );
}

#[test]
fn test_build_gloss_index_mismatch() {
    assert_eq!(
        build_gloss_index(Some("qwan-nɨ"), Some("уйти-CO-3SG.S")),
        GlossIndex::Mismatch
    );
    assert_eq!(
        build_gloss_index(Some("a-b-c"), Some("X")),
        GlossIndex::Mismatch
    );
}

#[test]
fn test_build_gloss_index_noop() {
    assert_eq!(build_gloss_index(None, Some("X-Y")), GlossIndex::NoOp);
    assert_eq!(build_gloss_index(Some("a-b"), None), GlossIndex::NoOp);
    assert_eq!(build_gloss_index(Some(""), Some("")), GlossIndex::NoOp);
    // 区切りだけの文字列も空扱い
    assert_eq!(build_gloss_index(Some("--"), Some("X")), GlossIndex::NoOp);
}

#[test]
fn test_build_gloss_index_is_positional() {
    assert_eq!(
        build_gloss_index(Some("b-a"), Some("X-Y")),
        GlossIndex::Annotation("X{b}-Y{a}-".to_owned())
    );
    assert_eq!(
        build_gloss_index(Some("a--b"), Some("X=Y")),
        build_gloss_index(Some("a-b"), Some("X-Y"))
    );
}
