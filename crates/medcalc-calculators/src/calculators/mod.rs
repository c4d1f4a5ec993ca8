pub mod bmi;
pub mod capra;
pub mod cha2ds2_vasc;
pub mod curb65;
pub mod egfr_ckd_epi;
pub mod gleason_grade;
pub mod psa_density;
