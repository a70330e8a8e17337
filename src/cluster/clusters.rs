use std::fmt;

/// One cluster after the final iteration.
#[derive(Clone, Debug, PartialEq)]
pub struct Cluster {
    pub center: Vec<f64>,
    pub points: Vec<Vec<f64>>,
}

/// Result of a k-means run: the clusters in id order, and for every input
/// point the id of the cluster it was allocated to.
#[derive(Clone, Debug, PartialEq)]
pub struct Clusters {
    pub clusters: Vec<Cluster>,
    pub labels: Vec<usize>,
}

impl Clusters {
    pub(crate) fn from_labels(points: &[Vec<f64>], centers: Vec<Vec<f64>>, labels: Vec<usize>) -> Self {
        let mut clusters: Vec<Cluster> = centers
            .into_iter()
            .map(|center| Cluster {
                center,
                points: Vec::new(),
            })
            .collect();

        for (point, &label) in points.iter().zip(&labels) {
            clusters[label].points.push(point.clone());
        }

        Self { clusters, labels }
    }

    pub fn len(&self) -> usize {
        self.clusters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Cluster> {
        self.clusters.iter()
    }

    /// Indices of the input points in each cluster.
    pub fn groups(&self) -> Vec<Vec<usize>> {
        let mut groups = vec![Vec::new(); self.clusters.len()];
        for (index, &label) in self.labels.iter().enumerate() {
            groups[label].push(index);
        }
        groups
    }
}

struct Point<'a>(&'a [f64]);

impl fmt::Display for Point<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, value) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", value)?;
        }
        write!(f, ")")
    }
}

impl fmt::Display for Clusters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (id, cluster) in self.clusters.iter().enumerate() {
            writeln!(
                f,
                "Cluster {} is centred at {} and has {} points.",
                id,
                Point(&cluster.center),
                cluster.points.len()
            )?;
            write!(f, "[")?;
            for (i, point) in cluster.points.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", Point(point))?;
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}
