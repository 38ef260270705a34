#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Lang {
    ZhCn,
    En,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum K {
    ActiveClocks,
    AddClocks,
    OtherZones,
    ConfigSection,
    Format24,
    ShowCity,
    ShowTimezone,
    Quit,
    TooltipTitle,
    TooltipHint,
}

pub fn detect_lang_from_env() -> Lang {
    let v = std::env::var("LC_ALL")
        .ok()
        .or_else(|| std::env::var("LC_MESSAGES").ok())
        .or_else(|| std::env::var("LANG").ok())
        .unwrap_or_default();
    let v = v.to_lowercase();
    if v.starts_with("zh") {
        Lang::ZhCn
    } else {
        Lang::En
    }
}

pub fn t(lang: Lang, k: K) -> &'static str {
    match (lang, k) {
        (Lang::ZhCn, K::ActiveClocks) => "已显示的时钟",
        (Lang::En, K::ActiveClocks) => "Active clocks",

        (Lang::ZhCn, K::AddClocks) => "添加时钟",
        (Lang::En, K::AddClocks) => "Add more clocks",

        (Lang::ZhCn, K::OtherZones) => "其他",
        (Lang::En, K::OtherZones) => "Other",

        (Lang::ZhCn, K::ConfigSection) => "设置",
        (Lang::En, K::ConfigSection) => "Config",

        (Lang::ZhCn, K::Format24) => "24 小时制",
        (Lang::En, K::Format24) => "24 hours format",
        (Lang::ZhCn, K::ShowCity) => "显示城市名",
        (Lang::En, K::ShowCity) => "Show city name",
        (Lang::ZhCn, K::ShowTimezone) => "显示时区缩写",
        (Lang::En, K::ShowTimezone) => "Show timezone",

        (Lang::ZhCn, K::Quit) => "退出",
        (Lang::En, K::Quit) => "Quit",

        (Lang::ZhCn, K::TooltipTitle) => "世界时钟",
        (Lang::En, K::TooltipTitle) => "World Clock",
        (Lang::ZhCn, K::TooltipHint) => "提示：GNOME 可能需要 AppIndicator 扩展才能显示托盘。",
        (Lang::En, K::TooltipHint) => "Note: GNOME may require an AppIndicator extension to show the tray.",
    }
}
