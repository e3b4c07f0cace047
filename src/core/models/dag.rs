//! Directed acyclic graph of course prerequisites

use std::collections::{HashMap, HashSet, VecDeque};

/// Represents a directed acyclic graph of course prerequisites
///
/// The DAG uses two association lists:
/// - `dependencies`: maps each course to its prerequisites
/// - `dependents`: maps each course to the courses that depend on it (reverse graph)
///
/// This bidirectional structure enables efficient traversal in both directions.
/// Acyclicity is assumed by contract; the traversal helpers tolerate cycles
/// via visited sets rather than relying on it.
#[derive(Debug, Clone)]
pub struct Dag {
    /// Maps course code -> list of prerequisite course codes
    pub dependencies: HashMap<String, Vec<String>>,

    /// Maps course code -> list of courses that depend on it
    pub dependents: HashMap<String, Vec<String>>,

    /// All course codes in the DAG
    pub courses: Vec<String>,
}

impl Dag {
    /// Create a new empty DAG
    #[must_use]
    pub fn new() -> Self {
        Self {
            dependencies: HashMap::new(),
            dependents: HashMap::new(),
            courses: Vec::new(),
        }
    }

    /// Add a course to the DAG
    ///
    /// # Arguments
    /// * `code` - The unique course code (e.g., "INF1201")
    pub fn add_course(&mut self, code: String) {
        if !self.courses.contains(&code) {
            self.courses.push(code.clone());
            self.dependencies.entry(code.clone()).or_default();
            self.dependents.entry(code).or_default();
        }
    }

    /// Add a prerequisite relationship
    ///
    /// # Arguments
    /// * `code` - Course that requires the prerequisite
    /// * `prerequisite_code` - Course that must be taken first
    pub fn add_prerequisite(&mut self, code: String, prerequisite_code: &str) {
        // Ensure both courses exist in the DAG
        self.add_course(code.clone());
        self.add_course(prerequisite_code.to_string());

        // Add to dependencies (course -> prerequisites)
        if let Some(deps) = self.dependencies.get_mut(&code) {
            if !deps.contains(&prerequisite_code.to_string()) {
                deps.push(prerequisite_code.to_string());
            }
        }

        // Add to dependents (prerequisite -> courses that depend on it)
        if let Some(deps) = self.dependents.get_mut(prerequisite_code) {
            if !deps.contains(&code) {
                deps.push(code);
            }
        }
    }

    /// Get all direct prerequisites for a course
    ///
    /// # Returns
    /// A reference to the list of prerequisite codes, or None if course not found
    #[must_use]
    pub fn get_prerequisites(&self, code: &str) -> Option<&Vec<String>> {
        self.dependencies.get(code)
    }

    /// Get all courses that directly depend on (require) a given course
    ///
    /// # Returns
    /// A reference to the list of dependent course codes, or None if course not found
    #[must_use]
    pub fn get_dependents(&self, code: &str) -> Option<&Vec<String>> {
        self.dependents.get(code)
    }

    /// Compute the full transitive closure of courses that depend on `code`,
    /// directly or through a chain of prerequisites.
    ///
    /// Breadth-first worklist traversal over the reverse graph with a visited
    /// set, so diamonds are reported once and a malformed cyclic input cannot
    /// loop. The starting course itself is not included in the result.
    #[must_use]
    pub fn transitive_dependents(&self, code: &str) -> HashSet<String> {
        let mut visited = HashSet::new();
        let mut queue = VecDeque::new();

        queue.push_back(code.to_string());

        while let Some(current) = queue.pop_front() {
            if let Some(children) = self.dependents.get(&current) {
                for child in children {
                    if visited.insert(child.clone()) {
                        queue.push_back(child.clone());
                    }
                }
            }
        }

        visited.remove(code);
        visited
    }

    /// Get the number of courses in the DAG
    #[must_use]
    pub const fn course_count(&self) -> usize {
        self.courses.len()
    }

    /// Check if a course exists in the DAG
    #[must_use]
    pub fn contains_course(&self, code: &str) -> bool {
        self.courses.contains(&code.to_string())
    }
}

impl Default for Dag {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Dag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Prerequisite DAG ({} courses):", self.courses.len())?;
        writeln!(f)?;

        // Sort courses for consistent output
        let mut sorted_courses = self.courses.clone();
        sorted_courses.sort();

        for code in sorted_courses {
            if let Some(deps) = self.dependencies.get(&code) {
                if deps.is_empty() {
                    writeln!(f, "  {code} → (no prerequisites)")?;
                } else {
                    let deps_str = deps.join(", ");
                    writeln!(f, "  {code} → {deps_str}")?;
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dag_creation() {
        let dag = Dag::new();
        assert_eq!(dag.course_count(), 0);
    }

    #[test]
    fn test_add_course() {
        let mut dag = Dag::new();
        dag.add_course("INF1101".to_string());
        assert_eq!(dag.course_count(), 1);
        assert!(dag.contains_course("INF1101"));
    }

    #[test]
    fn test_add_prerequisite() {
        let mut dag = Dag::new();
        dag.add_prerequisite("INF1201".to_string(), "INF1102");

        assert_eq!(dag.course_count(), 2);
        assert!(dag.contains_course("INF1201"));
        assert!(dag.contains_course("INF1102"));

        // Verify dependency relationship
        let deps = dag.get_prerequisites("INF1201").unwrap();
        assert!(deps.contains(&"INF1102".to_string()));

        // Verify reverse relationship
        let dependents = dag.get_dependents("INF1102").unwrap();
        assert!(dependents.contains(&"INF1201".to_string()));
    }

    #[test]
    fn test_duplicate_prerequisite() {
        let mut dag = Dag::new();
        dag.add_prerequisite("INF1201".to_string(), "INF1102");
        dag.add_prerequisite("INF1201".to_string(), "INF1102");

        let deps = dag.get_prerequisites("INF1201").unwrap();
        assert_eq!(deps.len(), 1); // Should not duplicate
    }

    #[test]
    fn transitive_dependents_follows_chains() {
        // A <- B <- C, A <- D
        let mut dag = Dag::new();
        dag.add_prerequisite("B".to_string(), "A");
        dag.add_prerequisite("C".to_string(), "B");
        dag.add_prerequisite("D".to_string(), "A");

        let deps = dag.transitive_dependents("A");
        assert_eq!(deps.len(), 3);
        assert!(deps.contains("B"));
        assert!(deps.contains("C"));
        assert!(deps.contains("D"));

        let deps_b = dag.transitive_dependents("B");
        assert_eq!(deps_b.len(), 1);
        assert!(deps_b.contains("C"));
    }

    #[test]
    fn transitive_dependents_handles_diamond() {
        // D requires B and C, both require A
        let mut dag = Dag::new();
        dag.add_prerequisite("B".to_string(), "A");
        dag.add_prerequisite("C".to_string(), "A");
        dag.add_prerequisite("D".to_string(), "B");
        dag.add_prerequisite("D".to_string(), "C");

        let deps = dag.transitive_dependents("A");
        // D reachable through both branches but reported once
        assert_eq!(deps.len(), 3);
        assert!(deps.contains("D"));
    }

    #[test]
    fn transitive_dependents_tolerates_cycle() {
        // Malformed input: A <-> B. Traversal must terminate and not
        // include the starting course in its own closure.
        let mut dag = Dag::new();
        dag.add_prerequisite("B".to_string(), "A");
        dag.add_prerequisite("A".to_string(), "B");

        let deps = dag.transitive_dependents("A");
        assert_eq!(deps.len(), 1);
        assert!(deps.contains("B"));
    }

    #[test]
    fn transitive_dependents_of_leaf_is_empty() {
        let mut dag = Dag::new();
        dag.add_prerequisite("B".to_string(), "A");

        assert!(dag.transitive_dependents("B").is_empty());
    }

    #[test]
    fn test_dag_display() {
        let mut dag = Dag::new();
        dag.add_prerequisite("INF1201".to_string(), "INF1102");
        dag.add_prerequisite("INF1201".to_string(), "MAT1185");
        dag.add_course("MAT1101".to_string()); // Course with no prerequisites

        let display = format!("{dag}");
        assert!(display.contains("Prerequisite DAG"));
        assert!(display.contains("INF1201"));
        assert!(display.contains("MAT1185"));
    }
}
