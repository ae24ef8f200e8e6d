//! Static message tables for the notifier.
//!
//! Templates use `{}` placeholders which are substituted in order by [`fill`].

use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    En,
    #[serde(rename = "pt-br")]
    PtBr,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::PtBr];

    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::PtBr => "pt-br",
        }
    }

    /// Resolve a language code, falling back to English for unknown codes.
    #[must_use]
    pub fn from_code(code: &str) -> Self {
        let normalized = code.trim().to_ascii_lowercase().replace('_', "-");
        match normalized.as_str() {
            "pt-br" | "pt" => Language::PtBr,
            _ => Language::En,
        }
    }

    #[must_use]
    pub fn messages(self) -> &'static Messages {
        match self {
            Language::En => &EN,
            Language::PtBr => &PT_BR,
        }
    }
}

impl<'de> Deserialize<'de> for Language {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let code = String::deserialize(deserializer)?;
        Ok(Language::from_code(&code))
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct ErrorMessages {
    pub current_version_invalid: &'static str,
    pub last_version_invalid: &'static str,
    pub url_not_found: &'static str,
    pub checking_update: &'static str,
}

#[derive(Debug, PartialEq, Eq)]
pub struct WarnMessages {
    pub skip_check_for_updates: &'static str,
    pub update_not_available: &'static str,
}

#[derive(Debug, PartialEq, Eq)]
pub struct InfoMessages {
    pub checking_for_update: &'static str,
    pub skipping_pre_release: &'static str,
    pub new_version_available_message: &'static str,
    pub running_last_version: &'static str,
    pub no_releases: &'static str,
}

#[derive(Debug, PartialEq, Eq)]
pub struct Messages {
    pub error: ErrorMessages,
    pub warn: WarnMessages,
    pub info: InfoMessages,
    pub dialog_new_version_available_message: &'static str,
    pub dialog_new_version_available_detail: &'static str,
    pub update_checker: &'static str,
    pub download: &'static str,
    pub later: &'static str,
    pub close: &'static str,
}

static EN: Messages = Messages {
    error: ErrorMessages {
        current_version_invalid: "The current version \"{}\" is not a valid semantic version",
        last_version_invalid: "The latest release version \"{}\" is not a valid semantic version",
        url_not_found: "Repository URL not found. Set the repository option or declare a GitHub repository in the package manifest",
        checking_update: "An error occurred while checking for updates",
    },
    warn: WarnMessages {
        skip_check_for_updates: "Skipping update check: the application is not packaged and debug mode is off",
        update_not_available: "Update not available",
    },
    info: InfoMessages {
        checking_for_update: "Checking for updates...",
        skipping_pre_release: "Skipping pre-release version",
        new_version_available_message: "New version available: {}",
        running_last_version: "You are running the latest version",
        no_releases: "No releases published yet",
    },
    dialog_new_version_available_message: "A new version is available",
    dialog_new_version_available_detail: "Current version: {}\nNew version: {}\n\nDo you want to download it now?",
    update_checker: "Update checker",
    download: "Download",
    later: "Later",
    close: "Close",
};

static PT_BR: Messages = Messages {
    error: ErrorMessages {
        current_version_invalid: "A versão atual \"{}\" não é uma versão semântica válida",
        last_version_invalid: "A versão da última release \"{}\" não é uma versão semântica válida",
        url_not_found: "URL do repositório não encontrada. Defina a opção repository ou declare um repositório do GitHub no manifesto do pacote",
        checking_update: "Ocorreu um erro ao verificar atualizações",
    },
    warn: WarnMessages {
        skip_check_for_updates: "Verificação de atualização ignorada: a aplicação não está empacotada e o modo debug está desligado",
        update_not_available: "Atualização não disponível",
    },
    info: InfoMessages {
        checking_for_update: "Verificando atualizações...",
        skipping_pre_release: "Ignorando versão de pré-lançamento",
        new_version_available_message: "Nova versão disponível: {}",
        running_last_version: "Você está usando a versão mais recente",
        no_releases: "Nenhuma release publicada ainda",
    },
    dialog_new_version_available_message: "Uma nova versão está disponível",
    dialog_new_version_available_detail: "Versão atual: {}\nNova versão: {}\n\nDeseja baixá-la agora?",
    update_checker: "Verificador de atualizações",
    download: "Baixar",
    later: "Depois",
    close: "Fechar",
};

/// Substitute each `{}` in `template` with the next entry of `args`.
///
/// Placeholders without a matching argument are left untouched.
#[must_use]
pub fn fill(template: &str, args: &[&str]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut args = args.iter();
    let mut rest = template;

    while let Some(idx) = rest.find("{}") {
        out.push_str(&rest[..idx]);
        match args.next() {
            Some(arg) => out.push_str(arg),
            None => out.push_str("{}"),
        }
        rest = &rest[idx + 2..];
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_substitutes_placeholders_in_order() {
        assert_eq!(fill("{} -> {}", &["1.0.0", "1.1.0"]), "1.0.0 -> 1.1.0");
        assert_eq!(fill("no placeholders", &["x"]), "no placeholders");
        assert_eq!(fill("{} and {}", &["one"]), "one and {}");
    }

    #[test]
    fn language_codes_resolve_with_english_fallback() {
        assert_eq!(Language::from_code("pt-br"), Language::PtBr);
        assert_eq!(Language::from_code("PT_BR"), Language::PtBr);
        assert_eq!(Language::from_code("en"), Language::En);
        assert_eq!(Language::from_code("klingon"), Language::En);
    }

    #[test]
    fn language_deserializes_from_code() {
        let parsed: Vec<Language> =
            serde_json::from_str(r#"["en", "pt-br", "fr"]"#).expect("valid language list");
        assert_eq!(parsed, vec![Language::En, Language::PtBr, Language::En]);
        assert_eq!(
            serde_json::to_string(&Language::PtBr).expect("language serializes"),
            "\"pt-br\""
        );
    }

    #[test]
    fn every_language_has_a_complete_table() {
        for language in Language::ALL {
            let messages = language.messages();
            assert_eq!(
                messages.dialog_new_version_available_detail.matches("{}").count(),
                2,
                "{language} detail template takes current and new version"
            );
            assert_eq!(
                messages.info.new_version_available_message.matches("{}").count(),
                1
            );
            assert!(!messages.download.is_empty());
            assert!(!messages.later.is_empty());
            assert!(!messages.close.is_empty());
        }
        assert_ne!(Language::En.messages(), Language::PtBr.messages());
    }
}
