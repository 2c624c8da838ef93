use crate::models::{GitHubAsset, Preference, SelectionPolicy};

/// Pick the single installable asset out of a release's asset list.
///
/// Candidates are scanned in catalog order. The first asset passing the
/// accept/reject filter wins outright when no preference is set. An active
/// musl/AppImage preference is a hard filter, not a ranking: qualifying
/// assets that miss the preferred marker are skipped, and if none carries it
/// the result is `None` even though acceptable assets existed.
pub fn select_asset<'a>(
    assets: &'a [GitHubAsset],
    policy: &SelectionPolicy,
) -> Option<&'a GitHubAsset> {
    for asset in assets {
        if !policy.qualifies(&asset.name) {
            continue;
        }
        match policy.preference {
            Preference::None => return Some(asset),
            Preference::Musl if asset.name.contains("musl") => return Some(asset),
            Preference::AppImage if asset.name.contains("AppImage") => return Some(asset),
            _ => {}
        }
    }
    None
}
