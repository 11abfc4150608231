//! "열×행×층" 레이아웃 문자열 파싱과 홀 이름 생성, 기둥(라이저)별 부하 집계를 제공한다.

use std::collections::BTreeMap;

/// 데이터센터 레이아웃 치수.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub columns: u32,
    pub rows: u32,
    pub floors: u32,
}

impl Layout {
    /// 전체 홀 수.
    pub fn total_halls(&self) -> u32 {
        self.columns * self.rows * self.floors
    }

    /// 층당 홀 수.
    pub fn halls_per_floor(&self) -> u32 {
        self.columns * self.rows
    }
}

/// 레이아웃 파싱/검증 오류를 표현한다.
#[derive(Debug, Clone)]
pub enum LayoutError {
    /// 빈 문자열
    Empty,
    /// `CxRxF` 형식이 아니거나 정수가 아닌 값 포함
    InvalidFormat(String),
    /// 0 이하의 치수
    NonPositiveDimension,
    /// 홀 부하 목록이 비어 있음
    EmptyHallData,
    /// 이름 없는 홀
    UnnamedHall,
    /// 음수 IT 부하
    NegativeLoad(String),
}

impl std::fmt::Display for LayoutError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LayoutError::Empty => write!(f, "레이아웃 문자열이 비어 있습니다."),
            LayoutError::InvalidFormat(s) => {
                write!(f, "잘못된 레이아웃 형식: {s} (예: 4x3x2)")
            }
            LayoutError::NonPositiveDimension => {
                write!(f, "레이아웃 치수는 모두 1 이상이어야 합니다.")
            }
            LayoutError::EmptyHallData => write!(f, "홀 부하 목록이 비어 있습니다."),
            LayoutError::UnnamedHall => write!(f, "모든 홀은 이름이 있어야 합니다."),
            LayoutError::NegativeLoad(hall) => {
                write!(f, "IT 부하는 음수일 수 없습니다: {hall}")
            }
        }
    }
}

impl std::error::Error for LayoutError {}

/// `C×R×F` 또는 `CxRxF` 문자열을 파싱한다. 공백은 허용한다.
pub fn parse_layout(layout_str: &str) -> Result<Layout, LayoutError> {
    let trimmed = layout_str.trim();
    if trimmed.is_empty() {
        return Err(LayoutError::Empty);
    }
    let normalized = trimmed.replace('×', "x");
    let parts: Vec<&str> = normalized.split('x').collect();
    if parts.len() != 3 {
        return Err(LayoutError::InvalidFormat(layout_str.to_string()));
    }
    let mut dims = [0u32; 3];
    for (slot, part) in dims.iter_mut().zip(parts.iter()) {
        *slot = part
            .trim()
            .parse::<u32>()
            .map_err(|_| LayoutError::InvalidFormat(layout_str.to_string()))?;
    }
    if dims.iter().any(|&d| d == 0) {
        return Err(LayoutError::NonPositiveDimension);
    }
    Ok(Layout {
        columns: dims[0],
        rows: dims[1],
        floors: dims[2],
    })
}

/// 열 인덱스를 문자 라벨로 바꾼다. A..Z 다음은 AA, AB 순서다.
fn column_letters(index: u32) -> String {
    if index < 26 {
        char::from(b'A' + index as u8).to_string()
    } else {
        let first = char::from(b'A' + (index / 26) as u8 - 1);
        let second = char::from(b'A' + (index % 26) as u8);
        format!("{first}{second}")
    }
}

/// 레이아웃 치수로부터 홀 이름 목록을 생성한다.
/// 층 우선 순회이며 `include_floors`가 참이면 `A1-F2` 형식을 쓴다.
pub fn make_hall_names(layout: &Layout, include_floors: bool) -> Vec<String> {
    let mut names = Vec::with_capacity(layout.total_halls() as usize);
    for floor in 1..=layout.floors {
        for col in 0..layout.columns {
            let letters = column_letters(col);
            for row in 1..=layout.rows {
                if include_floors {
                    names.push(format!("{letters}{row}-F{floor}"));
                } else {
                    names.push(format!("{letters}{row}"));
                }
            }
        }
    }
    names
}

/// 홀 하나의 IT 부하.
#[derive(Debug, Clone)]
pub struct HallLoad {
    pub hall: String,
    /// IT 부하 [MW]
    pub it_load_mw: f64,
}

/// 모든 홀에 동일 부하를 배정한 목록을 만든다.
pub fn uniform_hall_loads(layout: &Layout, include_floors: bool, mw_per_hall: f64) -> Vec<HallLoad> {
    make_hall_names(layout, include_floors)
        .into_iter()
        .map(|hall| HallLoad {
            hall,
            it_load_mw: mw_per_hall,
        })
        .collect()
}

/// 홀 부하 목록을 검증한다.
pub fn validate_hall_loads(hall_loads: &[HallLoad]) -> Result<(), LayoutError> {
    if hall_loads.is_empty() {
        return Err(LayoutError::EmptyHallData);
    }
    for load in hall_loads {
        if load.hall.trim().is_empty() {
            return Err(LayoutError::UnnamedHall);
        }
        if load.it_load_mw < 0.0 {
            return Err(LayoutError::NegativeLoad(load.hall.clone()));
        }
    }
    Ok(())
}

/// 기둥 하나(공유 라이저)에 모인 부하 집계.
#[derive(Debug, Clone)]
pub struct ColumnAggregate {
    pub column: String,
    /// 기둥 합계 IT 부하 [MW]
    pub total_mw: f64,
    pub hall_count: u32,
    /// 소속 홀 이름 (정렬, 쉼표 구분)
    pub halls: String,
}

/// `A1-F2` 또는 `A1` 형식의 홀 이름에서 열 문자를 추출한다.
fn extract_column(hall_name: &str) -> String {
    let base = hall_name
        .split_once("-F")
        .map(|(base, _)| base)
        .unwrap_or(hall_name);
    let column: String = base.chars().take_while(|c| c.is_ascii_alphabetic()).collect();
    if column.is_empty() {
        "Unknown".to_string()
    } else {
        column
    }
}

/// 라이저 사이징을 위해 홀 부하를 열 문자 기준으로 집계한다.
/// 결과는 열 이름 오름차순이다.
pub fn column_aggregates(hall_loads: &[HallLoad]) -> Vec<ColumnAggregate> {
    let mut grouped: BTreeMap<String, (f64, Vec<String>)> = BTreeMap::new();
    for load in hall_loads {
        let entry = grouped
            .entry(extract_column(&load.hall))
            .or_insert_with(|| (0.0, Vec::new()));
        entry.0 += load.it_load_mw;
        entry.1.push(load.hall.clone());
    }
    grouped
        .into_iter()
        .map(|(column, (total_mw, mut halls))| {
            halls.sort();
            ColumnAggregate {
                column,
                total_mw,
                hall_count: halls.len() as u32,
                halls: halls.join(", "),
            }
        })
        .collect()
}
