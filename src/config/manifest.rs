use crate::domain::content::{Content, Contents};
use crate::domain::media::{Audio, Image};
use crate::domain::model::{Pack, Round, Theme};
use crate::domain::question::Question;
use crate::utils::error::{PackError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_path, Validate};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// TOML description of a whole pack.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackManifest {
    pub pack: PackSection,
    #[serde(default)]
    pub rounds: Vec<RoundSpec>,
    /// 相對媒體路徑的基準目錄（manifest 所在目錄）
    #[serde(skip)]
    pub base_dir: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackSection {
    pub name: String,
    pub tag: String,
    pub author: String,
    pub output: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundSpec {
    pub name: String,
    #[serde(default, rename = "final")]
    pub is_final: bool,
    #[serde(default)]
    pub themes: Vec<ThemeSpec>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeSpec {
    pub name: String,
    #[serde(default)]
    pub questions: Vec<QuestionSpec>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionSpec {
    pub price: i64,
    pub question: ContentSpec,
    pub answer: String,
    pub answer_content: Option<ContentSpec>,
}

/// A single item or a list of items.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ContentSpec {
    Many(Vec<ItemSpec>),
    One(ItemSpec),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemSpec {
    Text(String),
    Image { image: PathBuf },
    Audio { audio: PathBuf },
}

impl ContentSpec {
    fn items(&self) -> &[ItemSpec] {
        match self {
            ContentSpec::Many(items) => items,
            ContentSpec::One(item) => std::slice::from_ref(item),
        }
    }

    fn to_contents(&self, base_dir: &Path) -> Contents {
        self.items()
            .iter()
            .map(|item| item.to_content(base_dir))
            .collect()
    }
}

impl ItemSpec {
    fn to_content(&self, base_dir: &Path) -> Content {
        match self {
            ItemSpec::Text(text) => Content::Text(text.clone()),
            ItemSpec::Image { image } => Image::new(base_dir.join(image)).into(),
            ItemSpec::Audio { audio } => Audio::new(base_dir.join(audio)).into(),
        }
    }
}

impl PackManifest {
    /// 從 TOML 檔案載入 manifest
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let mut manifest = Self::from_toml_str(&content)?;
        manifest.base_dir = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        Ok(manifest)
    }

    /// 從 TOML 字串解析 manifest
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| PackError::ManifestError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${AUTHOR})
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        use std::sync::OnceLock;

        static ENV_VAR: OnceLock<Regex> = OnceLock::new();
        let re = ENV_VAR
            .get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid"));

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
    }

    /// Output path from the manifest, resolved against its directory.
    pub fn output_path(&self) -> Option<PathBuf> {
        self.pack
            .output
            .as_ref()
            .map(|output| self.base_dir.join(output))
    }

    pub fn question_count(&self) -> usize {
        self.rounds
            .iter()
            .flat_map(|round| &round.themes)
            .map(|theme| theme.questions.len())
            .sum()
    }

    pub fn to_pack(&self) -> Result<Pack> {
        let mut rounds = Vec::with_capacity(self.rounds.len());

        for round in &self.rounds {
            let mut themes = Vec::with_capacity(round.themes.len());
            for theme in &round.themes {
                let questions = theme
                    .questions
                    .iter()
                    .map(|spec| self.build_question(spec))
                    .collect::<Result<Vec<_>>>()?;
                themes.push(Theme::new(theme.name.clone(), questions));
            }

            rounds.push(if round.is_final {
                Round::final_round(round.name.clone(), themes)
            } else {
                Round::new(round.name.clone(), themes)
            });
        }

        Ok(Pack::new(
            self.pack.name.clone(),
            self.pack.tag.clone(),
            self.pack.author.clone(),
            rounds,
        ))
    }

    fn build_question(&self, spec: &QuestionSpec) -> Result<Question> {
        let question = Question::new(
            spec.price,
            spec.question.to_contents(&self.base_dir),
            spec.answer.clone(),
        )?;

        Ok(match &spec.answer_content {
            Some(content) => question.with_answer_content(content.to_contents(&self.base_dir)),
            None => question,
        })
    }
}

impl Validate for PackManifest {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("pack.name", &self.pack.name)?;

        if let Some(output) = &self.pack.output {
            validate_path("pack.output", output)?;
        }

        for (r, round) in self.rounds.iter().enumerate() {
            for (t, theme) in round.themes.iter().enumerate() {
                for (q, question) in theme.questions.iter().enumerate() {
                    if question.question.items().is_empty() {
                        return Err(PackError::InvalidConfigValueError {
                            field: format!("rounds[{}].themes[{}].questions[{}].question", r, t, q),
                            value: "[]".to_string(),
                            reason: "Question content cannot be empty".to_string(),
                        });
                    }
                }
            }
        }

        Ok(())
    }
}
