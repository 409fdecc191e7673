use serde_json::{json, Value};

/// W3C web element identifier key in element references.
pub const ELEMENT_KEY: &str = "element-6066-11e4-a52e-4f735466cecf";

/// New-session capabilities for headless Chrome at a fixed window size.
pub fn chrome_capabilities() -> Value {
    json!({
        "capabilities": {
            "alwaysMatch": {
                "browserName": "chrome",
                "goog:chromeOptions": {
                    "args": [
                        "--headless=new",
                        "--no-sandbox",
                        "--disable-dev-shm-usage",
                        "--disable-gpu",
                        "--window-size=1920,1080"
                    ]
                }
            }
        }
    })
}

/// Locator payload for a CSS selector lookup.
pub fn css_locator(selector: &str) -> Value {
    json!({
        "using": "css selector",
        "value": selector
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capabilities_request_headless_chrome() {
        let caps = chrome_capabilities();
        let args = &caps["capabilities"]["alwaysMatch"]["goog:chromeOptions"]["args"];
        let args: Vec<&str> = args
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect();
        assert!(args.contains(&"--headless=new"));
        assert!(args.contains(&"--window-size=1920,1080"));
    }

    #[test]
    fn test_css_locator_shape() {
        let locator = css_locator("input[name='j_username']");
        assert_eq!(locator["using"], "css selector");
        assert_eq!(locator["value"], "input[name='j_username']");
    }
}
