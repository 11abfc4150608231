/// 60°F 기준 냉수 계통 유체 물성 테이블과 코드 조회를 제공한다.
/// 값은 참고용이며 설계 시 실제 운전 온도의 물성으로 검증해야 한다.

/// 유체 물성 데이터.
#[derive(Debug, Clone, Copy)]
pub struct FluidData {
    pub code: &'static str,
    pub name: &'static str,
    /// 밀도 [lb/ft³]
    pub density_lb_per_ft3: f64,
    /// 동점도 [lb/ft·s]
    pub viscosity_lb_per_ft_s: f64,
}

/// 알 수 없는 유체 코드를 표현한다.
#[derive(Debug, Clone)]
pub struct UnknownFluid(pub String);

impl std::fmt::Display for UnknownFluid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "알 수 없는 유체: {}", self.0)
    }
}

impl std::error::Error for UnknownFluid {}

const FLUIDS: [FluidData; 3] = [
    FluidData {
        code: "water",
        name: "Water",
        density_lb_per_ft3: 62.4,
        viscosity_lb_per_ft_s: 2.73e-5,
    },
    FluidData {
        code: "glycol_30",
        name: "30% Ethylene Glycol",
        density_lb_per_ft3: 63.8,
        viscosity_lb_per_ft_s: 4.2e-5,
    },
    FluidData {
        code: "glycol_50",
        name: "50% Ethylene Glycol",
        density_lb_per_ft3: 65.4,
        viscosity_lb_per_ft_s: 8.9e-5,
    },
];

/// 표준 유체 테이블을 반환한다.
pub fn standard_fluids() -> &'static [FluidData] {
    &FLUIDS
}

/// 주어진 테이블에서 코드 또는 표시 이름으로 유체를 찾는다.
pub fn find_fluid<'a>(table: &'a [FluidData], code: &str) -> Option<&'a FluidData> {
    table
        .iter()
        .find(|f| f.code.eq_ignore_ascii_case(code) || f.name.eq_ignore_ascii_case(code))
}

/// 코드로 (밀도, 동점도)를 조회한다. 없는 코드는 오류를 반환한다.
pub fn fluid_properties(table: &[FluidData], code: &str) -> Result<(f64, f64), UnknownFluid> {
    find_fluid(table, code)
        .map(|f| (f.density_lb_per_ft3, f.viscosity_lb_per_ft_s))
        .ok_or_else(|| UnknownFluid(code.to_string()))
}
