//! Dialog URL builders.

/// Merge caller params over defaults. A caller key replaces the default with
/// the same key in place; new keys are appended in order.
pub fn merge_params(
    defaults: Vec<(String, String)>,
    params: &[(String, String)],
) -> Vec<(String, String)> {
    let mut merged = defaults;
    for (key, value) in params {
        match merged.iter_mut().find(|(k, _)| k == key) {
            Some(slot) => slot.1 = value.clone(),
            None => merged.push((key.clone(), value.clone())),
        }
    }
    merged
}

/// Join `origin` and `path` and append the URL-encoded query, if any.
pub fn build_url(origin: &str, path: &str, params: &[(String, String)]) -> String {
    let mut url = format!("{}/{}", origin.trim_end_matches('/'), path.trim_start_matches('/'));
    if !params.is_empty() {
        let query = url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(params.iter().map(|(k, v)| (k.as_str(), v.as_str())))
            .finish();
        url.push('?');
        url.push_str(&query);
    }
    url
}

/// `<www>/dialog/oauth?client_id=...`
pub fn login_url(www: &str, app_id: &str, params: &[(String, String)]) -> String {
    let merged = merge_params(vec![("client_id".into(), app_id.into())], params);
    build_url(www, "dialog/oauth", &merged)
}

/// `<www>/logout.php?...&access_token=...`
pub fn logout_url(www: &str, user_token: Option<&str>, params: &[(String, String)]) -> String {
    let mut defaults = Vec::new();
    if let Some(token) = user_token {
        defaults.push(("access_token".to_string(), token.to_string()));
    }
    build_url(www, "logout.php", &merge_params(defaults, params))
}

/// `<www>/extern/login_status.php?api_key=...&session_version=3`
pub fn login_status_url(www: &str, app_id: &str, params: &[(String, String)]) -> String {
    let defaults = vec![
        ("api_key".to_string(), app_id.to_string()),
        ("session_version".to_string(), "3".to_string()),
    ];
    build_url(www, "extern/login_status.php", &merge_params(defaults, params))
}
