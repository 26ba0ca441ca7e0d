/// a skim lookup result: the requested variable and its distance counterpart
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SkimValue {
    pub value: f64,
    pub blend: f64,
}

impl SkimValue {
    pub fn new(value: f64, blend: f64) -> SkimValue {
        SkimValue { value, blend }
    }
}
