// コーパス文書 (JSON) への型付きビュー
//
// 文書全体は serde_json::Value のまま保持し，書き戻しで未知のキーとその順序を失わないようにする．
// 想定外の形 (配列でない "sentences"，オブジェクトでない "ana" など) は読み飛ばす．

use serde_json::{Map, Value};

// セリクプ語の文
pub const PRIMARY_LANG: i64 = 0;

const SENTENCES: &str = "sentences";
const LANG: &str = "lang";
const WORDS: &str = "words";
const ANA: &str = "ana";
const PARTS: &str = "parts";
const GLOSS: &str = "gloss";
const GLOSS_INDEX: &str = "gloss_index";
const GLOSS_INDEX_RU: &str = "gloss_index_ru";

pub struct CorpusDocument<'a> {
    root: &'a mut Value,
}

impl<'a> CorpusDocument<'a> {
    pub fn new(root: &'a mut Value) -> Self {
        CorpusDocument { root }
    }

    // (配列中の位置, 文)
    pub fn sentences_mut(&mut self) -> impl Iterator<Item = (usize, Sentence<'_>)> + '_ {
        self.root
            .get_mut(SENTENCES)
            .and_then(Value::as_array_mut)
            .into_iter()
            .flatten()
            .enumerate()
            .filter_map(|(i, value)| value.as_object_mut().map(|object| (i, Sentence { object })))
    }
}

pub struct Sentence<'a> {
    object: &'a mut Map<String, Value>,
}

impl Sentence<'_> {
    pub fn is_primary_language(&self) -> bool {
        // 0.0 も 0 とみなす
        self.object
            .get(LANG)
            .and_then(Value::as_f64)
            .map_or(false, |lang| lang == PRIMARY_LANG as f64)
    }

    pub fn words_mut(&mut self) -> impl Iterator<Item = (usize, Word<'_>)> + '_ {
        self.object
            .get_mut(WORDS)
            .and_then(Value::as_array_mut)
            .into_iter()
            .flatten()
            .enumerate()
            .filter_map(|(i, value)| value.as_object_mut().map(|object| (i, Word { object })))
    }
}

pub struct Word<'a> {
    object: &'a mut Map<String, Value>,
}

impl Word<'_> {
    // ana[0] のみ
    pub fn first_analysis_mut(&mut self) -> Option<Analysis<'_>> {
        self.object
            .get_mut(ANA)
            .and_then(Value::as_array_mut)
            .and_then(|ana| ana.first_mut())
            .and_then(Value::as_object_mut)
            .map(|object| Analysis { object })
    }
}

pub struct Analysis<'a> {
    object: &'a mut Map<String, Value>,
}

impl Analysis<'_> {
    fn get_str(&self, key: &str) -> Option<&str> {
        self.object.get(key).and_then(Value::as_str)
    }

    pub fn parts(&self) -> Option<&str> {
        self.get_str(PARTS)
    }

    pub fn gloss(&self) -> Option<&str> {
        self.get_str(GLOSS)
    }

    pub fn gloss_index(&self) -> Option<&str> {
        self.get_str(GLOSS_INDEX)
    }

    pub fn gloss_index_ru(&self) -> Option<&str> {
        self.get_str(GLOSS_INDEX_RU)
    }

    // 両方とも既に index なら何もせず false
    pub fn set_gloss_index(&mut self, index: &str) -> bool {
        if self.gloss_index() == Some(index) && self.gloss_index_ru() == Some(index) {
            return false;
        }

        self.object
            .insert(GLOSS_INDEX.to_owned(), Value::String(index.to_owned()));
        self.object
            .insert(GLOSS_INDEX_RU.to_owned(), Value::String(index.to_owned()));

        true
    }
}
