use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const APP_EXIT: &str = "general.app_exit";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const PROMPT_SELECT: &str = "prompt.select";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_QUICK_SIZING: &str = "main_menu.quick_sizing";
    pub const MAIN_MENU_LAYOUT_ANALYSIS: &str = "main_menu.layout_analysis";
    pub const MAIN_MENU_CHILLER_SIZING: &str = "main_menu.chiller_sizing";
    pub const MAIN_MENU_UNIT_CONVERSION: &str = "main_menu.unit_conversion";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";

    pub const QUICK_HEADING: &str = "quick.heading";
    pub const PROMPT_COOLING_LOAD: &str = "prompt.cooling_load";
    pub const PROMPT_DELTA_T: &str = "prompt.delta_t";
    pub const PROMPT_MAX_VELOCITY: &str = "prompt.max_velocity";
    pub const PROMPT_MAX_DP: &str = "prompt.max_dp";

    pub const FLUID_HEADING: &str = "fluid.heading";
    pub const PROMPT_FLUID_SELECT: &str = "fluid.prompt_select";

    pub const RESULT_PIPE_HEADING: &str = "result.pipe_heading";
    pub const RESULT_STANDARD_SIZE: &str = "result.standard_size";
    pub const RESULT_ACTUAL_ID: &str = "result.actual_id";
    pub const RESULT_RAW_ID: &str = "result.raw_id";
    pub const RESULT_UNRESOLVED_NOTE: &str = "result.unresolved_note";
    pub const RESULT_FLOW: &str = "result.flow";
    pub const RESULT_VELOCITY: &str = "result.velocity";
    pub const RESULT_REYNOLDS: &str = "result.reynolds";
    pub const RESULT_FRICTION: &str = "result.friction";
    pub const RESULT_DP: &str = "result.dp";
    pub const WARN_HIGH_VELOCITY: &str = "warn.high_velocity";

    pub const LAYOUT_HEADING: &str = "layout.heading";
    pub const PROMPT_LAYOUT: &str = "layout.prompt_layout";
    pub const PROMPT_INCLUDE_FLOORS: &str = "layout.prompt_include_floors";
    pub const PROMPT_SAME_MW: &str = "layout.prompt_same_mw";
    pub const PROMPT_MW_PER_HALL: &str = "layout.prompt_mw_per_hall";
    pub const PROMPT_FAN_HEAT: &str = "layout.prompt_fan_heat";
    pub const LAYOUT_SUMMARY_HEADING: &str = "layout.summary_heading";
    pub const LAYOUT_TOTAL_IT: &str = "layout.total_it";
    pub const LAYOUT_TOTAL_COOLING: &str = "layout.total_cooling";
    pub const RISER_HEADING: &str = "layout.riser_heading";
    pub const RISER_TABLE_HEADER: &str = "layout.riser_table_header";

    pub const CHILLER_HEADING: &str = "chiller.heading";
    pub const CHILLER_RECOMMEND_HEADING: &str = "chiller.recommend_heading";
    pub const PROMPT_REDUNDANCY_MODEL: &str = "chiller.prompt_redundancy";
    pub const PROMPT_REDUNDANCY_PERCENT: &str = "chiller.prompt_redundancy_percent";
    pub const PROMPT_STRATEGY: &str = "chiller.prompt_strategy";
    pub const PROMPT_MAX_CHILLERS: &str = "chiller.prompt_max_chillers";
    pub const PROMPT_ELECTRICITY_RATE: &str = "chiller.prompt_electricity_rate";
    pub const CHILLER_TABLE_HEADER: &str = "chiller.table_header";
    pub const CHILLER_NO_RESULT: &str = "chiller.no_result";
    pub const CHILLER_BEST_HEADING: &str = "chiller.best_heading";

    pub const UNIT_CONVERSION_HEADING: &str = "unit_conversion.heading";
    pub const UNIT_CONVERSION_OPTIONS_LINE1: &str = "unit_conversion.options_line1";
    pub const UNIT_CONVERSION_OPTIONS_LINE2: &str = "unit_conversion.options_line2";
    pub const UNIT_CONVERSION_PROMPT_KIND: &str = "unit_conversion.prompt_kind";
    pub const UNIT_CONVERSION_PROMPT_VALUE: &str = "unit_conversion.prompt_value";
    pub const UNIT_CONVERSION_PROMPT_FROM_UNIT: &str = "unit_conversion.prompt_from_unit";
    pub const UNIT_CONVERSION_PROMPT_TO_UNIT: &str = "unit_conversion.prompt_to_unit";
    pub const UNIT_CONVERSION_RESULT: &str = "unit_conversion.result";
    pub const UNIT_CONVERSION_UNSUPPORTED: &str = "unit_conversion.unsupported";

    pub const GUI_NAV_HEADING: &str = "gui.nav.heading";
    pub const GUI_TAB_QUICK: &str = "gui.tab.quick";
    pub const GUI_TAB_LAYOUT: &str = "gui.tab.layout";
    pub const GUI_TAB_CHILLER: &str = "gui.tab.chiller";
    pub const GUI_TAB_UNIT_CONV: &str = "gui.tab.unit_conv";
    pub const GUI_TAB_SETTINGS: &str = "gui.tab.settings";
    pub const GUI_RUN_SIZING: &str = "gui.run_sizing";
    pub const GUI_RUN_SEARCH: &str = "gui.run_search";
    pub const GUI_EXPORT_CSV: &str = "gui.export_csv";
    pub const GUI_EXPORTED: &str = "gui.exported";
    pub const GUI_SAVE_SETTINGS: &str = "gui.save_settings";
    pub const GUI_FLUID: &str = "gui.fluid";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT_UNIT_SYSTEM: &str = "settings.current_unit_system";
    pub const SETTINGS_OPTIONS: &str = "settings.options";
    pub const SETTINGS_PROMPT_CHANGE: &str = "settings.prompt_change";
    pub const SETTINGS_PROMPT_LANGUAGE: &str = "settings.prompt_language";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("en") {
            Language::En
        } else {
            Language::Ko
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 ko로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    pub fn language_code(&self) -> &'static str {
        self.lang.as_code()
    }

    /// 번역을 가져온다. 영어 번역이 없으면 한국어 문자열을 폴백한다.
    pub fn t(&self, key: &'static str) -> &'static str {
        match self.lang {
            Language::En => en(key).unwrap_or_else(|| ko(key)),
            Language::Ko => ko(key),
        }
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en".into()),
        _ => None,
    }
}

fn detect_system_language() -> Option<String> {
    get_locale().and_then(|loc| normalize_lang(&loc))
}

fn ko(key: &'static str) -> &'static str {
    match key {
        keys::APP_EXIT => "프로그램을 종료합니다.",
        keys::ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        keys::INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        keys::PROMPT_MENU_SELECT => "메뉴 선택: ",
        keys::PROMPT_SELECT => "선택: ",
        keys::MAIN_MENU_TITLE => "=== Data Center Pipe Sizer ===",
        keys::MAIN_MENU_QUICK_SIZING => "빠른 배관 사이징 (MW + ΔT)",
        keys::MAIN_MENU_LAYOUT_ANALYSIS => "레이아웃 기반 분석",
        keys::MAIN_MENU_CHILLER_SIZING => "칠러 구성 탐색",
        keys::MAIN_MENU_UNIT_CONVERSION => "단위 변환기",
        keys::MAIN_MENU_SETTINGS => "설정",
        keys::MAIN_MENU_EXIT => "종료",
        keys::QUICK_HEADING => "-- 빠른 배관 사이징 --",
        keys::PROMPT_COOLING_LOAD => "총 냉각부하 [MW]: ",
        keys::PROMPT_DELTA_T => "ΔT [°F]",
        keys::PROMPT_MAX_VELOCITY => "허용 유속 [ft/s]",
        keys::PROMPT_MAX_DP => "허용 압력손실 [psi/100ft]",
        keys::FLUID_HEADING => "-- 유체 선택 --",
        keys::PROMPT_FLUID_SELECT => "유체 번호 선택",
        keys::RESULT_PIPE_HEADING => "[주 배관 사이징 결과]",
        keys::RESULT_STANDARD_SIZE => "표준 호칭경",
        keys::RESULT_ACTUAL_ID => "실제 내경",
        keys::RESULT_RAW_ID => "수렴 내경(비표준)",
        keys::RESULT_UNRESOLVED_NOTE => "주의: 수렴 직경이 표준 배관 테이블을 벗어났습니다. 병렬 배관을 검토하세요.",
        keys::RESULT_FLOW => "유량",
        keys::RESULT_VELOCITY => "유속",
        keys::RESULT_REYNOLDS => "레이놀즈수",
        keys::RESULT_FRICTION => "마찰계수",
        keys::RESULT_DP => "압력손실(100ft 당)",
        keys::WARN_HIGH_VELOCITY => "경고: 유속이 10 ft/s를 초과합니다. 소음/침식 위험이 있으니 더 큰 배관을 검토하세요.",
        keys::LAYOUT_HEADING => "-- 레이아웃 기반 분석 --",
        keys::PROMPT_LAYOUT => "레이아웃 (열x행x층, 예 4x3x2): ",
        keys::PROMPT_INCLUDE_FLOORS => "홀 이름에 층 번호 포함? [y/N]: ",
        keys::PROMPT_SAME_MW => "모든 홀에 동일 부하 적용? [Y/n]: ",
        keys::PROMPT_MW_PER_HALL => "홀당 IT 부하 [MW]: ",
        keys::PROMPT_FAN_HEAT => "팬 발열 가산율 [%]",
        keys::LAYOUT_SUMMARY_HEADING => "[레이아웃 분석 결과]",
        keys::LAYOUT_TOTAL_IT => "총 IT 부하",
        keys::LAYOUT_TOTAL_COOLING => "총 냉각부하(팬 발열 포함)",
        keys::RISER_HEADING => "[기둥별 공유 라이저 사이징]",
        keys::RISER_TABLE_HEADER => "기둥     IT MW    냉각 MW   호칭경     유속        ΔP/100ft",
        keys::CHILLER_HEADING => "-- 칠러 구성 탐색 --",
        keys::CHILLER_RECOMMEND_HEADING => "[칠러 추천]",
        keys::PROMPT_REDUNDANCY_MODEL => "여유율 모델: 1=N+1  2=N+2  3=N+%",
        keys::PROMPT_REDUNDANCY_PERCENT => "목표 여유율 [%]",
        keys::PROMPT_STRATEGY => "전략: 1=모듈형(소형 다수)  2=중앙집중형(대형 소수)  3=균형형(전체)",
        keys::PROMPT_MAX_CHILLERS => "허용 최대 대수",
        keys::PROMPT_ELECTRICITY_RATE => "전력 단가 [$/kWh]",
        keys::CHILLER_TABLE_HEADER => "#   MW      톤      총대수  운전   예비   부하율%   10년 TCO      TCO/MW",
        keys::CHILLER_NO_RESULT => "조건을 만족하는 칠러 구성이 없습니다. 제약을 완화해 보세요.",
        keys::CHILLER_BEST_HEADING => "[최적 구성 상세]",
        keys::UNIT_CONVERSION_HEADING => "-- 단위 변환 --",
        keys::UNIT_CONVERSION_OPTIONS_LINE1 => "1) 온도  2) 온도차  3) 압력  4) 길이  5) 속도",
        keys::UNIT_CONVERSION_OPTIONS_LINE2 => "6) 밀도  7) 점도  8) 질량유량  9) 체적유량 10) 냉각부하",
        keys::UNIT_CONVERSION_PROMPT_KIND => "항목 번호를 입력: ",
        keys::UNIT_CONVERSION_PROMPT_VALUE => "값 입력: ",
        keys::UNIT_CONVERSION_PROMPT_FROM_UNIT => "입력 단위(ex: F, psi, ft/s, gpm, MW): ",
        keys::UNIT_CONVERSION_PROMPT_TO_UNIT => "변환 단위(ex: C, kPa, m/s, m3/h, ton): ",
        keys::UNIT_CONVERSION_RESULT => "변환 결과",
        keys::UNIT_CONVERSION_UNSUPPORTED => "지원하지 않는 번호입니다.",
        keys::GUI_NAV_HEADING => "메뉴",
        keys::GUI_TAB_QUICK => "빠른 사이징",
        keys::GUI_TAB_LAYOUT => "레이아웃 분석",
        keys::GUI_TAB_CHILLER => "칠러 구성",
        keys::GUI_TAB_UNIT_CONV => "단위 변환",
        keys::GUI_TAB_SETTINGS => "설정",
        keys::GUI_RUN_SIZING => "사이징 실행",
        keys::GUI_RUN_SEARCH => "구성 탐색",
        keys::GUI_EXPORT_CSV => "CSV 내보내기",
        keys::GUI_EXPORTED => "CSV 파일을 저장했습니다",
        keys::GUI_SAVE_SETTINGS => "설정 저장",
        keys::GUI_FLUID => "유체",
        keys::SETTINGS_HEADING => "-- 설정 --",
        keys::SETTINGS_CURRENT_UNIT_SYSTEM => "현재 단위 시스템",
        keys::SETTINGS_OPTIONS => "1) Imperial  2) SI",
        keys::SETTINGS_PROMPT_CHANGE => "변경할 번호(취소하려면 엔터): ",
        keys::SETTINGS_PROMPT_LANGUAGE => "언어 (auto/ko/en, 취소하려면 엔터): ",
        keys::SETTINGS_INVALID => "잘못된 입력이므로 변경하지 않습니다.",
        keys::SETTINGS_SAVED => "설정이 저장되었습니다.",
        _ => key,
    }
}

fn en(key: &str) -> Option<&'static str> {
    let s = match key {
        keys::APP_EXIT => "Exiting.",
        keys::ERROR_INVALID_NUMBER => "Please enter a number.",
        keys::INVALID_SELECTION_RETRY => "Invalid selection. Try again.",
        keys::PROMPT_MENU_SELECT => "Select menu: ",
        keys::PROMPT_SELECT => "Select: ",
        keys::MAIN_MENU_TITLE => "=== Data Center Pipe Sizer ===",
        keys::MAIN_MENU_QUICK_SIZING => "Quick pipe sizing (MW + ΔT)",
        keys::MAIN_MENU_LAYOUT_ANALYSIS => "Layout-based analysis",
        keys::MAIN_MENU_CHILLER_SIZING => "Chiller configuration search",
        keys::MAIN_MENU_UNIT_CONVERSION => "Unit converter",
        keys::MAIN_MENU_SETTINGS => "Settings",
        keys::MAIN_MENU_EXIT => "Exit",
        keys::QUICK_HEADING => "-- Quick Pipe Sizing --",
        keys::PROMPT_COOLING_LOAD => "Total cooling load [MW]: ",
        keys::PROMPT_DELTA_T => "ΔT [°F]",
        keys::PROMPT_MAX_VELOCITY => "Max velocity [ft/s]",
        keys::PROMPT_MAX_DP => "Max pressure drop [psi/100ft]",
        keys::FLUID_HEADING => "-- Fluid Selection --",
        keys::PROMPT_FLUID_SELECT => "Select fluid number",
        keys::RESULT_PIPE_HEADING => "[Main Pipe Sizing Result]",
        keys::RESULT_STANDARD_SIZE => "Standard pipe size",
        keys::RESULT_ACTUAL_ID => "Actual pipe ID",
        keys::RESULT_RAW_ID => "Converged ID (non-standard)",
        keys::RESULT_UNRESOLVED_NOTE => "Note: converged diameter exceeds the pipe schedule. Consider parallel mains.",
        keys::RESULT_FLOW => "Flow rate",
        keys::RESULT_VELOCITY => "Velocity",
        keys::RESULT_REYNOLDS => "Reynolds number",
        keys::RESULT_FRICTION => "Friction factor",
        keys::RESULT_DP => "Pressure drop (per 100ft)",
        keys::WARN_HIGH_VELOCITY => "Warning: velocity exceeds 10 ft/s. Consider a larger pipe to reduce noise and erosion risk.",
        keys::LAYOUT_HEADING => "-- Layout-Based Analysis --",
        keys::PROMPT_LAYOUT => "Layout (columns x rows x floors, e.g. 4x3x2): ",
        keys::PROMPT_INCLUDE_FLOORS => "Include floor numbers in hall names? [y/N]: ",
        keys::PROMPT_SAME_MW => "Use same load for all halls? [Y/n]: ",
        keys::PROMPT_MW_PER_HALL => "IT load per hall [MW]: ",
        keys::PROMPT_FAN_HEAT => "Fan heat percentage [%]",
        keys::LAYOUT_SUMMARY_HEADING => "[Layout Analysis Results]",
        keys::LAYOUT_TOTAL_IT => "Total IT load",
        keys::LAYOUT_TOTAL_COOLING => "Total cooling load (incl. fan heat)",
        keys::RISER_HEADING => "[Shared Riser Sizing by Column]",
        keys::RISER_TABLE_HEADER => "Column   IT MW    Cool MW   Size       Velocity    dP/100ft",
        keys::CHILLER_HEADING => "-- Chiller Configuration Search --",
        keys::CHILLER_RECOMMEND_HEADING => "[Chiller Recommendations]",
        keys::PROMPT_REDUNDANCY_MODEL => "Redundancy model: 1=N+1  2=N+2  3=N+%",
        keys::PROMPT_REDUNDANCY_PERCENT => "Target redundancy [%]",
        keys::PROMPT_STRATEGY => "Strategy: 1=Modular (many small)  2=Central (few large)  3=Balanced (all)",
        keys::PROMPT_MAX_CHILLERS => "Maximum number of chillers",
        keys::PROMPT_ELECTRICITY_RATE => "Electricity rate [$/kWh]",
        keys::CHILLER_TABLE_HEADER => "#   MW      Tons    Units  Oper.  Spare  Loading%  10-Yr TCO     TCO/MW",
        keys::CHILLER_NO_RESULT => "No suitable chiller configurations found. Try relaxing constraints.",
        keys::CHILLER_BEST_HEADING => "[Best Option Details]",
        keys::UNIT_CONVERSION_HEADING => "-- Unit Conversion --",
        keys::UNIT_CONVERSION_OPTIONS_LINE1 => "1) Temperature  2) Temp. difference  3) Pressure  4) Length  5) Velocity",
        keys::UNIT_CONVERSION_OPTIONS_LINE2 => "6) Density  7) Viscosity  8) Mass flow  9) Volume flow 10) Cooling load",
        keys::UNIT_CONVERSION_PROMPT_KIND => "Enter item number: ",
        keys::UNIT_CONVERSION_PROMPT_VALUE => "Enter value: ",
        keys::UNIT_CONVERSION_PROMPT_FROM_UNIT => "From unit (ex: F, psi, ft/s, gpm, MW): ",
        keys::UNIT_CONVERSION_PROMPT_TO_UNIT => "To unit (ex: C, kPa, m/s, m3/h, ton): ",
        keys::UNIT_CONVERSION_RESULT => "Result",
        keys::UNIT_CONVERSION_UNSUPPORTED => "Unsupported number.",
        keys::GUI_NAV_HEADING => "Menu",
        keys::GUI_TAB_QUICK => "Quick Sizing",
        keys::GUI_TAB_LAYOUT => "Layout Analysis",
        keys::GUI_TAB_CHILLER => "Chiller Options",
        keys::GUI_TAB_UNIT_CONV => "Unit Converter",
        keys::GUI_TAB_SETTINGS => "Settings",
        keys::GUI_RUN_SIZING => "Run sizing",
        keys::GUI_RUN_SEARCH => "Search configurations",
        keys::GUI_EXPORT_CSV => "Export CSV",
        keys::GUI_EXPORTED => "CSV file saved",
        keys::GUI_SAVE_SETTINGS => "Save settings",
        keys::GUI_FLUID => "Fluid",
        keys::SETTINGS_HEADING => "-- Settings --",
        keys::SETTINGS_CURRENT_UNIT_SYSTEM => "Current unit system",
        keys::SETTINGS_OPTIONS => "1) Imperial  2) SI",
        keys::SETTINGS_PROMPT_CHANGE => "Number to change (enter to cancel): ",
        keys::SETTINGS_PROMPT_LANGUAGE => "Language (auto/ko/en, enter to cancel): ",
        keys::SETTINGS_INVALID => "Invalid input. Nothing changed.",
        keys::SETTINGS_SAVED => "Settings saved.",
        _ => return None,
    };
    Some(s)
}
