//! Chemical class labels for gut metabolic gene cluster types.
//!
//! The table is fixed at startup and read-only for the lifetime of the
//! process, so unsynchronized concurrent lookups are safe.

use std::collections::HashMap;
use std::sync::LazyLock;

static CLUSTER_CLASSES: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut m = HashMap::new();
    m.insert("Putrescine2spermidine", "Aliphatic_amine");
    m.insert("HGD_related", "Putative");
    m.insert("Arginine2putrescine", "Aliphatic_amine");
    m.insert("PFOR_II_pathway", "SCFA");
    m.insert("NADH_dehydrogenase_I", "E-MGC");
    m.insert("Respiratory_glycerol", "E-MGC");
    m.insert("Formate_dehydrogenase", "E-MGC");
    m.insert("Ech_complex", "E-MGC");
    m.insert("Nitrate_reductase", "E-MGC");
    m.insert("Molybdopterin_dependent_oxidoreductase", "E-MGC");
    m.insert("Rnf_complex", "E-MGC");
    m.insert("Pyruvate2acetate-formate", "SCFA");
    m.insert("Sulfate2sulfide", "E-MGC");
    m.insert("Hydroxy-L-proline2proline", "Other");
    m.insert("Phenylacetate2toluene", "Aromatic");
    m.insert("Indoleacetate2scatole", "Aromatic");
    m.insert("Fumarate2succinate", "SCFA");
    m.insert("Acetyl-CoA_pathway", "SCFA");
    m.insert("hydroxybenzoate2phenol", "Aromatic");
    m.insert("pdu", "alcohol-SCFA");
    m.insert("EUT_pathway", "SCFA");
    m.insert("TMA", "Aliphatic_amine-SCFA");
    m.insert("p-cresol", "Aromatic");
    m.insert("Arginine2_Hcarbonate", "Other");
    m.insert("proline2aminovalerate", "npAA");
    m.insert("Leucine_reduction", "SCFA");
    m.insert("gallic_acid_met", "Aromatic");
    m.insert("bai_operon", "Other");
    m.insert("acetate2butyrate", "SCFA");
    m.insert("AAA_reductive_branch", "Aromatic");
    m.insert("porA", "SCFA");
    m.insert("Lysine_degradation", "SCFA");
    m.insert("glutamate2butyric", "SCFA");
    m.insert("caffeate_respiration", "Aromatic");
    m.insert("carnitine_degradaion_caiTABCDE", "npAA");
    m.insert("aminobutyrate2Butyrate", "SCFA");
    m.insert("succinate2propionate", "SCFA");
    m.insert("acrylate2propionate", "SCFA");
    m.insert("Threonine2propionate", "SCFA");
    m.insert("Glycine_reductase", "SCFA");
    m.insert("Glycine_cleavage", "Other");
    m.insert("histidine2glutamate_hutHGIU_operon", "Other");
    // duplicated in the published table with the same class; last insert wins
    m.insert("succinate2propionate", "SCFA");
    m.insert("Oxidative_glycerol", "Other");
    m.insert("Flavoenzyme_AA_peptides_catabolism", "Putative");
    m.insert("Flavoenzyme_sugar_catabolism", "Putative");
    m.insert("Flavoenzyme_lipids_catabolism", "Putative");
    m.insert("OD_lactate_related", "Putative");
    m.insert("OD_eut_pdu_related", "Putative");
    m.insert("OD_AA_metabolism", "Putative");
    m.insert("OD_fatty_acids", "Putative");
    m.insert("OD_aldehydes_related", "Putative");
    m.insert("OD_unknown", "Putative");
    m.insert("TPP_fatty_acids", "Putative");
    m.insert("TPP_AA_metabolism", "Putative");
    m.insert("GR_AA_metabolism", "Putative");
    m.insert("GR_eut-pdu-related", "Putative");
    m.insert("GR_fatty_acids", "Putative");
    m.insert("OD_GR_eut_related", "Putative");
    m.insert("OD_GR_unassigned", "Putative");
    m.insert("Others_HGD_unassigned", "Putative");
    m.insert("fatty_acids-unassigned", "Putative");
    m
});

/// Look up the chemical class label for a cluster type identifier.
///
/// The match is exact and case-sensitive. Returns `None` for unrecognized
/// identifiers.
pub fn cluster_class(identifier: &str) -> Option<&'static str> {
    CLUSTER_CLASSES.get(identifier).copied()
}

/// Iterate over every known cluster type and its class label.
///
/// Iteration order is unspecified.
pub fn known_cluster_types() -> impl Iterator<Item = (&'static str, &'static str)> {
    CLUSTER_CLASSES.iter().map(|(k, v)| (*k, *v))
}
