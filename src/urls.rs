//! Route URLs derived from the configured base URL.
//!
//! The browser client builds the same table from `config.baseUrl`, so the two
//! must stay in step. All URLs are plain concatenations onto the base URL,
//! which is expected to end with `/`.

use serde::Serialize;

/// Config object handed to the browser client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientConfig {
    pub base_url: String,
}

impl ClientConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Urls {
    pub frontend: FrontendUrls,
    pub backend: BackendUrls,
}

/// Pages served to the browser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrontendUrls {
    pub homepage: String,
    pub register_rick_roll: String,
    pub sign_in: String,
    pub sign_up: String,
    pub manage_rick_rolls: String,
    pub view_rick_roll: String,
    pub assets: AssetUrls,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetUrls {
    pub loading_gif: String,
}

/// JSON API endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BackendUrls {
    pub is_it_rick: String,
    pub register_rick_roll: String,
    pub sign_in: String,
    pub delete_rick_roll: String,
    pub verify_rick_roll: String,
}

impl Urls {
    pub fn from_base_url(base_url: &str) -> Self {
        let at = |route: &str| format!("{}{}", base_url, route);
        Self {
            frontend: FrontendUrls {
                homepage: base_url.to_string(),
                register_rick_roll: at("register_rick_roll/"),
                sign_in: at("sign-in/"),
                sign_up: at("sign-up/"),
                manage_rick_rolls: at("manage/"),
                view_rick_roll: at("view-rick-roll/"),
                assets: AssetUrls {
                    loading_gif: at("static/loading.gif"),
                },
            },
            backend: BackendUrls {
                is_it_rick: at("api/is_it_rick/"),
                register_rick_roll: at("api/register_rick_roll/"),
                sign_in: at("api/sign_in/"),
                delete_rick_roll: at("api/delete_rick_roll/"),
                verify_rick_roll: at("api/verify_rick_roll/"),
            },
        }
    }

    /// `(name, url)` pairs in display order.
    pub fn entries(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("frontend.homepage", self.frontend.homepage.as_str()),
            (
                "frontend.registerRickRoll",
                self.frontend.register_rick_roll.as_str(),
            ),
            ("frontend.signIn", self.frontend.sign_in.as_str()),
            ("frontend.signUp", self.frontend.sign_up.as_str()),
            (
                "frontend.manageRickRolls",
                self.frontend.manage_rick_rolls.as_str(),
            ),
            ("frontend.viewRickRoll", self.frontend.view_rick_roll.as_str()),
            (
                "frontend.assets.loadingGif",
                self.frontend.assets.loading_gif.as_str(),
            ),
            ("backend.isItRick", self.backend.is_it_rick.as_str()),
            (
                "backend.registerRickRoll",
                self.backend.register_rick_roll.as_str(),
            ),
            ("backend.signIn", self.backend.sign_in.as_str()),
            ("backend.deleteRickRoll", self.backend.delete_rick_roll.as_str()),
            ("backend.verifyRickRoll", self.backend.verify_rick_roll.as_str()),
        ]
    }
}
