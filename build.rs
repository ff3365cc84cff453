use std::path::Path;

fn main() {
    let assemblies_path = Path::new("assemblies/human_assemblies.json");
    validate_assembly_file(assemblies_path);
    set_build_dependencies();
}

fn validate_assembly_file(path: &Path) {
    assert!(
        path.exists(),
        "\n\nASSEMBLY BUILD ERROR: File not found\n\
         Path: {}\n",
        path.display()
    );

    let contents = std::fs::read_to_string(path).unwrap_or_else(|e| {
        panic!(
            "\n\nASSEMBLY BUILD ERROR: Failed to read file\n\
             Path: {}\n\
             Error: {e}\n",
            path.display()
        );
    });

    let data: serde_json::Value = serde_json::from_str(&contents).unwrap_or_else(|e| {
        panic!(
            "\n\nASSEMBLY BUILD ERROR: Invalid JSON\n\
             Path: {}\n\
             Error: {e}\n",
            path.display()
        );
    });

    validate_assembly_structure(&data);
}

fn validate_assembly_structure(data: &serde_json::Value) {
    let assemblies = data
        .get("assemblies")
        .and_then(serde_json::Value::as_array)
        .unwrap_or_else(|| {
            panic!("\n\nASSEMBLY BUILD ERROR: Missing top-level 'assemblies' array\n");
        });

    let mut seen_names = std::collections::HashSet::new();
    let mut total_contigs = 0;

    for (i, assembly) in assemblies.iter().enumerate() {
        let name = assembly
            .get("name")
            .and_then(serde_json::Value::as_str)
            .unwrap_or_else(|| {
                panic!("\n\nASSEMBLY BUILD ERROR: Assembly at index {i} missing 'name'\n");
            });

        let aliases: Vec<&str> = assembly
            .get("aliases")
            .and_then(serde_json::Value::as_array)
            .map(|a| a.iter().filter_map(serde_json::Value::as_str).collect())
            .unwrap_or_default();
        for label in std::iter::once(name).chain(aliases) {
            assert!(
                seen_names.insert(label.to_string()),
                "\n\nASSEMBLY BUILD ERROR: Duplicate assembly name or alias '{label}'\n"
            );
        }

        total_contigs += validate_contigs(assembly, name);
    }

    println!(
        "cargo:warning=Validated assemblies: {} assemblies, {total_contigs} total contigs",
        assemblies.len()
    );
}

fn validate_contigs(assembly: &serde_json::Value, name: &str) -> usize {
    let contigs = assembly
        .get("contigs")
        .and_then(serde_json::Value::as_array)
        .unwrap_or_else(|| {
            panic!("\n\nASSEMBLY BUILD ERROR: Assembly '{name}' missing 'contigs' array\n");
        });

    let mut seen_acs = std::collections::HashSet::new();
    for (j, contig) in contigs.iter().enumerate() {
        let ac = contig.get("ac").and_then(serde_json::Value::as_str);
        assert!(
            ac.is_some() && contig.get("name").is_some(),
            "\n\nASSEMBLY BUILD ERROR: Assembly '{name}' contig {j} needs 'ac' and 'name'\n"
        );
        assert!(
            seen_acs.insert(ac),
            "\n\nASSEMBLY BUILD ERROR: Assembly '{name}' repeats accession {ac:?}\n"
        );
    }
    contigs.len()
}

fn set_build_dependencies() {
    println!("cargo:rerun-if-changed=assemblies/human_assemblies.json");
    println!("cargo:rerun-if-changed=build.rs");
}
