use super::language::Language;

/// Canonical biomarker vocabulary the rename model selects from.
///
/// The model is asked to map a free-text label to exactly one entry, so the
/// list is embedded verbatim in every prompt rather than fine-tuned in.
pub const CANONICAL_BIOMARKERS: &str = "Active B12, Alanine Aminotransferase (ALT), Albumin, Alkaline Phosphatase (ALP), Anti-Müllerian Hormone, Apolipoprotein A (APOA), Apolipoprotein B (APOB), Calcium, Chloride, Cortisol (9am), Creatine Kinase, Creatinine, eGFR, Ferritin, Folate (serum), Follicle Stimulating Hormone (FSH), Free Androgen Index, Gamma GT, Globulin, Haematocrit (HCT), Haemoglobin, HbA1c, HDL, hs-CRP, Iron, Lactate Dehydrogenase (LDH), LDL, Lipoprotein a (Lp(a)), Luteinising Hormone (LH), Magnesium (Serum), Mean Corpuscular Haemoglobin Concentration (MCHC), Monocytes, Non-HDL Cholesterol, Oestradiol (Oestrogen), Omega 6: Omega 3 Ratio, Platelet Count, Progesterone, Prolactin, Red Blood Cell (RBC), Sex Hormone Binding Globulin (SHBG), Sodium, Testosterone (total), Thyroglobulin Antibodies, Thyroid Peroxidase Antibodies, Thyroid Stimulating Hormone (TSH), Thyroxine (T4, Free Direct), Total Cholesterol, Total IgA, Total Protein, Transferrin Saturation, Triglyceride-to-HDL Ratio (TG:HDL Ratio), Triglycerides, Triiodothyronine (T3, Free), Urea, Uric Acid, Vitamin A, Vitamin D (25 OH), Vitamin E, White Blood Cell Count (WBC)";

/// Build the rename prompt for one extracted test name.
pub fn build_rename_prompt(name: &str, language: Language) -> String {
    format!(
        "Overall List of Biomarkers: {CANONICAL_BIOMARKERS}.\n\
         Based on the overall list of biomarkers provided (JUST PROVIDE THE \
         BIOMARKER, NO MORE WORDS), retrieve in {language} (IMPORTANT!) the \
         biomarker that might represent the following one:\n{name}",
        language = language.full_name(),
    )
}
